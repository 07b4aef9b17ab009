//! Evaluation context for scheduling factors.

use crate::catalog::Campus;
use crate::config::FactorTuning;

/// Read-only inputs shared by every factor evaluation in a pass.
///
/// Holds the scoring constants and, when available, the campus geography
/// needed by the distance preference.
#[derive(Clone, Copy)]
pub struct FactorContext<'a> {
    /// Scoring constants.
    pub tuning: &'a FactorTuning,
    /// Campus geography; `None` disables the distance preference.
    pub campus: Option<&'a dyn Campus>,
}

impl<'a> FactorContext<'a> {
    /// Creates a context without campus data.
    pub fn new(tuning: &'a FactorTuning) -> Self {
        Self {
            tuning,
            campus: None,
        }
    }

    /// Attaches campus geography.
    pub fn with_campus(mut self, campus: &'a dyn Campus) -> Self {
        self.campus = Some(campus);
        self
    }
}

impl std::fmt::Debug for FactorContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorContext")
            .field("tuning", self.tuning)
            .field("campus", &self.campus.is_some())
            .finish()
    }
}
