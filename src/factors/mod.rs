//! Scheduling factors: pluggable hard filters and soft scorers.
//!
//! A factor either disqualifies a section for a student (`filter`) or
//! contributes a preference score in `[0.0, 1.0]` (`score`), or both.
//! Factors are configured per schedule and compose associatively:
//! the combined filter is the logical OR, the combined score is the sum.
//!
//! # Usage
//!
//! ```
//! use course_planner::factors::{FactorSet, SchedulingFactor};
//!
//! let factors: FactorSet = serde_json::from_str(r#"[
//!     {"name": "early_filter", "earliestHour": 9},
//!     {"name": "proximity", "punishHourBreaks": true},
//!     {"name": "no_torture"}
//! ]"#).unwrap();
//!
//! assert_eq!(factors.len(), 3);
//! assert_eq!(factors.iter().next().map(SchedulingFactor::name), Some("early_filter"));
//! ```

mod context;
pub mod rules;

pub use context::FactorContext;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Schedule, Section};
use rules::{
    DaysFilter, DaysPreference, DistancePreference, EarlyFilter, EarlyPreference,
    InstructorFilter, InstructorPreference, LateFilter, LatePreference, NoTorturePreference,
    ProximityPreference, ShortDayPreference,
};

/// Score contributed by a factor, in `[0.0, 1.0]`. Higher = preferred.
pub type FactorScore = f64;

/// A scheduling rule evaluated for one schedule and one candidate section.
///
/// Both operations have neutral defaults so a rule may implement only one.
pub trait Factor: Debug {
    /// Configuration name (e.g. `"early_filter"`).
    fn name(&self) -> &'static str;

    /// Returns `true` to disqualify the section for this schedule.
    fn filter(&self, _schedule: &Schedule, _section: &Section, _ctx: &FactorContext<'_>) -> bool {
        false
    }

    /// Preference for assigning the section to this schedule.
    fn score(
        &self,
        _schedule: &Schedule,
        _section: &Section,
        _ctx: &FactorContext<'_>,
    ) -> FactorScore {
        0.0
    }
}

/// A configured scheduling factor.
///
/// Deserializes from `{"name": "<factor>", ...parameters}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum SchedulingFactor {
    /// Reject sections meeting on any of the listed days.
    DaysFilter(DaysFilter),
    /// Prefer sections meeting on the listed days.
    DaysPreference(DaysPreference),
    /// Prefer short days.
    ShortDay,
    /// Prefer classes close together in time.
    Proximity(ProximityPreference),
    /// Prefer short walks between back-to-back classes.
    Distance,
    /// Prefer early starts.
    EarlyPreference,
    /// Prefer late starts.
    LatePreference,
    /// Reject sections starting before an hour.
    EarlyFilter(EarlyFilter),
    /// Reject sections starting after an hour.
    LateFilter(LateFilter),
    /// Discourage long back-to-back blocks.
    NoTorture,
    /// Reject sections taught by listed instructors.
    InstructorFilter(InstructorFilter),
    /// Prefer sections taught by listed instructors.
    InstructorPreference(InstructorPreference),
}

impl SchedulingFactor {
    fn rule(&self) -> &dyn Factor {
        match self {
            SchedulingFactor::DaysFilter(rule) => rule,
            SchedulingFactor::DaysPreference(rule) => rule,
            SchedulingFactor::ShortDay => &ShortDayPreference,
            SchedulingFactor::Proximity(rule) => rule,
            SchedulingFactor::Distance => &DistancePreference,
            SchedulingFactor::EarlyPreference => &EarlyPreference,
            SchedulingFactor::LatePreference => &LatePreference,
            SchedulingFactor::EarlyFilter(rule) => rule,
            SchedulingFactor::LateFilter(rule) => rule,
            SchedulingFactor::NoTorture => &NoTorturePreference,
            SchedulingFactor::InstructorFilter(rule) => rule,
            SchedulingFactor::InstructorPreference(rule) => rule,
        }
    }

    /// Configuration name.
    pub fn name(&self) -> &'static str {
        self.rule().name()
    }

    /// Whether this factor disqualifies the section.
    pub fn filter(&self, schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> bool {
        self.rule().filter(schedule, section, ctx)
    }

    /// This factor's preference for the section.
    pub fn score(
        &self,
        schedule: &Schedule,
        section: &Section,
        ctx: &FactorContext<'_>,
    ) -> FactorScore {
        self.rule().score(schedule, section, ctx)
    }
}

/// The factors active for one schedule.
///
/// An empty set filters nothing and scores every section 0.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorSet {
    factors: Vec<SchedulingFactor>,
}

impl FactorSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a factor.
    pub fn with(mut self, factor: SchedulingFactor) -> Self {
        self.factors.push(factor);
        self
    }

    /// Number of factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether no factors are active.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterates the factors in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SchedulingFactor> {
        self.factors.iter()
    }

    /// Logical OR of every factor's filter verdict.
    pub fn filter(&self, schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> bool {
        self.factors
            .iter()
            .any(|f| f.filter(schedule, section, ctx))
    }

    /// Sum of every factor's score.
    pub fn score(&self, schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> f64 {
        self.factors
            .iter()
            .map(|f| f.score(schedule, section, ctx))
            .sum()
    }

    /// Mean of the non-zero factor scores, or `None` if every factor
    /// scored 0.0 (pure filters included).
    pub fn mean_nonzero_score(
        &self,
        schedule: &Schedule,
        section: &Section,
        ctx: &FactorContext<'_>,
    ) -> Option<f64> {
        let scores: Vec<f64> = self
            .factors
            .iter()
            .map(|f| f.score(schedule, section, ctx))
            .filter(|s| *s != 0.0)
            .collect();

        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }

    /// Individual scores, one per factor, for diagnostics.
    pub fn evaluate(
        &self,
        schedule: &Schedule,
        section: &Section,
        ctx: &FactorContext<'_>,
    ) -> Vec<(&'static str, FactorScore)> {
        self.factors
            .iter()
            .map(|f| (f.name(), f.score(schedule, section, ctx)))
            .collect()
    }
}

impl From<Vec<SchedulingFactor>> for FactorSet {
    fn from(factors: Vec<SchedulingFactor>) -> Self {
        Self { factors }
    }
}

impl FromIterator<SchedulingFactor> for FactorSet {
    fn from_iter<I: IntoIterator<Item = SchedulingFactor>>(iter: I) -> Self {
        Self {
            factors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FactorSet {
    type Item = &'a SchedulingFactor;
    type IntoIter = std::slice::Iter<'a, SchedulingFactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}
