//! Plan summaries.
//!
//! Reports how far each finished schedule falls short of what the student
//! asked for. The engine never fails; a shortfall here is how an infeasible
//! course surfaces to the reporting layer.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Requested | Target distinct course count for the term |
//! | Scheduled | Distinct courses with at least one assigned section |
//! | Shortfall | max(0, requested - scheduled) |
//! | Missing required | Required courses with no section |
//! | Mean score | Mean summed factor score of the assigned sections |

use serde::Serialize;

use crate::factors::FactorContext;
use crate::models::{distinct_courses, Schedule, Term};

/// Per-term outcome of one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSummary {
    pub term: Term,
    pub requested: usize,
    pub scheduled: usize,
    /// Required courses of the term left without a section (`"SUBJ NUM"`).
    pub missing_required: Vec<String>,
    /// `None` when the term has no assigned sections.
    pub mean_score: Option<f64>,
}

impl TermSummary {
    /// Summarises the schedule's current term.
    pub fn calculate(schedule: &Schedule, ctx: &FactorContext<'_>) -> Self {
        let classes = schedule.classes();
        let mean_score = if classes.is_empty() {
            None
        } else {
            let total: f64 = classes.iter().map(|s| schedule.score(s, ctx)).sum();
            Some(total / classes.len() as f64)
        };

        Self {
            term: schedule.current_term,
            requested: schedule.course_amount(),
            scheduled: distinct_courses(classes),
            missing_required: schedule
                .required_courses()
                .iter()
                .filter(|c| !schedule.has_course(&c.id))
                .map(|c| c.full_name())
                .collect(),
            mean_score,
        }
    }

    /// Courses requested but not scheduled.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.scheduled)
    }
}

/// Two-term outcome of one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub name: String,
    pub first_term: TermSummary,
    pub second_term: TermSummary,
}

impl PlanSummary {
    /// Summarises both terms of a schedule.
    pub fn calculate(schedule: &Schedule, ctx: &FactorContext<'_>) -> Self {
        let mut view = schedule.clone();
        view.current_term = Term::First;
        let first_term = TermSummary::calculate(&view, ctx);
        view.current_term = Term::Second;
        let second_term = TermSummary::calculate(&view, ctx);

        Self {
            name: schedule.name.clone(),
            first_term,
            second_term,
        }
    }

    /// Total courses missing over both terms.
    pub fn shortfall(&self) -> usize {
        self.first_term.shortfall() + self.second_term.shortfall()
    }

    /// Whether every requested course was scheduled.
    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }
}
