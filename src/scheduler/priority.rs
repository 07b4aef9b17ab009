//! Course ordering for a scheduling pass.
//!
//! Required courses are placed before electives. Within each role, courses
//! are placed in descending priority.
//!
//! # Required priority
//!
//! ```text
//! 1 / avg_sections_per_activity + 0.15 * shared_by + 0.05 * longest_hours
//! ```
//!
//! Fewer alternatives per activity means the course is harder to place, so
//! it goes first. Courses wanted by many students go first so they can be
//! placed jointly while their timetables are still open.
//!
//! # Elective priority
//!
//! ```text
//! 0.2 * eligible_schedules + avg_realised_preference
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::PlannerConfig;
use crate::factors::FactorContext;
use crate::models::{CourseId, Schedule, Section};

/// Weight of the number of schedules sharing a required course.
pub const REQUIRED_SHARED_WEIGHT: f64 = 0.15;
/// Weight of the longest section (hours) of a required course.
pub const REQUIRED_LONGEST_WEIGHT: f64 = 0.05;
/// Weight of the number of schedules eligible for an elective.
pub const ELECTIVE_SHARED_WEIGHT: f64 = 0.2;

/// Division that yields 0.0 when the divisor is 0.
pub fn safe_division(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        0.0
    } else {
        dividend / divisor
    }
}

/// Components of a required course's priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequiredPriority {
    /// `1 / average sections per activity`.
    pub weighted_sections: f64,
    /// Schedules that selected the course.
    pub shared_by: usize,
    /// Duration of the longest section, hours.
    pub longest_hours: f64,
}

impl RequiredPriority {
    /// Computes the priority of a required course from its remaining sections.
    pub fn calculate(
        course: &CourseId,
        sections: &[Arc<Section>],
        schedules: &[Schedule],
        config: &PlannerConfig,
    ) -> Self {
        let shared_by = schedules.iter().filter(|s| s.has_selected(course)).count();

        let longest_hours = sections
            .iter()
            .map(|s| s.duration_minutes())
            .max()
            .unwrap_or(0) as f64
            / 60.0;

        let mut per_activity: HashMap<&str, usize> = HashMap::new();
        for section in sections
            .iter()
            .filter(|s| !config.is_ignored_activity(&s.activity))
        {
            *per_activity.entry(section.activity.as_str()).or_default() += 1;
        }

        let total: usize = per_activity.values().sum();
        let average = safe_division(total as f64, per_activity.len() as f64);

        Self {
            weighted_sections: safe_division(1.0, average),
            shared_by,
            longest_hours,
        }
    }

    /// Combined score; higher is placed first.
    pub fn score(&self) -> f64 {
        self.weighted_sections
            + self.shared_by as f64 * REQUIRED_SHARED_WEIGHT
            + self.longest_hours * REQUIRED_LONGEST_WEIGHT
    }
}

/// Components of an elective's priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectivePriority {
    /// Schedules currently eligible for the elective.
    pub shared_by: usize,
    /// Mean realised preference of the eligible schedules' current
    /// assignments under their own factors.
    pub average_score: f64,
}

impl ElectivePriority {
    /// Computes the priority of an elective for its eligible schedules.
    pub fn calculate(eligible: &[usize], schedules: &[Schedule], ctx: &FactorContext<'_>) -> Self {
        let total: f64 = eligible
            .iter()
            .map(|&i| realised_preference(&schedules[i], ctx))
            .sum();

        Self {
            shared_by: eligible.len(),
            average_score: safe_division(total, eligible.len() as f64),
        }
    }

    /// Combined score; higher is placed first.
    pub fn score(&self) -> f64 {
        self.shared_by as f64 * ELECTIVE_SHARED_WEIGHT + self.average_score
    }
}

/// Mean, over a schedule's assigned sections, of the mean non-zero factor
/// score each section earns.
fn realised_preference(schedule: &Schedule, ctx: &FactorContext<'_>) -> f64 {
    let classes = schedule.classes();
    let total: f64 = classes
        .iter()
        .map(|s| {
            schedule
                .factors
                .mean_nonzero_score(schedule, s, ctx)
                .unwrap_or(0.0)
        })
        .sum();
    safe_division(total, classes.len() as f64)
}

/// Sorts items by descending score, keeping input order among ties.
pub fn sort_descending<T>(items: Vec<(f64, T)>) -> Vec<T> {
    let mut items = items;
    items.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    items.into_iter().map(|(_, item)| item).collect()
}
