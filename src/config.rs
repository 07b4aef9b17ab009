//! Planner configuration.
//!
//! Loads engine options and the tuned scoring constants from TOML so they
//! can be adjusted without code changes. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use course_planner::config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     verbose = true
//!
//!     [tuning]
//!     proximity_upper_bound = 800.0
//! "#).unwrap();
//!
//! assert!(config.verbose);
//! assert_eq!(config.tuning.proximity_upper_bound, 800.0);
//! assert_eq!(config.tuning.distance_upper_bound_minutes, 15.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Scoring constants used by the scheduling factors.
///
/// These were tuned empirically. They shape preferences, they are not
/// correctness constants.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FactorTuning {
    /// Total gap (minutes) at which proximity scores 0.
    pub proximity_upper_bound: f64,
    /// Gap credit (minutes) for a back-to-back day.
    pub back_to_back_bonus: f64,
    /// Gap penalty (minutes) for a one-hour break when enabled.
    pub hour_break_penalty: f64,
    /// Break length (minutes) the penalty applies to.
    pub hour_break_minutes: i32,
    /// Summed day span (hours) at which short-day scores 0.
    pub short_day_upper_bound_hours: f64,
    /// Back-to-back hours tolerated per day before no-torture penalises.
    pub no_torture_daily_tolerance_hours: f64,
    /// Excess hours at which no-torture scores 0.
    pub no_torture_upper_bound_hours: f64,
    /// Average walk (minutes) at which distance scores 0.
    pub distance_upper_bound_minutes: f64,
    /// Latest class start (minutes) used by the late preference.
    pub latest_class_minutes: f64,
}

impl Default for FactorTuning {
    fn default() -> Self {
        Self {
            proximity_upper_bound: 1000.0,
            back_to_back_bonus: 120.0,
            hour_break_penalty: 90.0,
            hour_break_minutes: 60,
            short_day_upper_bound_hours: 45.0,
            no_torture_daily_tolerance_hours: 3.0,
            no_torture_upper_bound_hours: 6.0,
            distance_upper_bound_minutes: 15.0,
            latest_class_minutes: 20.0 * 60.0,
        }
    }
}

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Raise priority scores and timetables to `info` level logging.
    pub verbose: bool,
    /// Factor scoring constants.
    pub tuning: FactorTuning,
    /// Activity labels never scheduled (compared case-insensitively).
    pub ignored_activities: Vec<String>,
    /// Comment marker of sections reserved for a separate program.
    pub reserved_comment_marker: String,
    /// Status of sections in the standard timetable (never offered to students).
    pub standard_timetable_status: String,
    /// Status substring (case-insensitive) of cancelled sections.
    pub cancelled_marker: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            tuning: FactorTuning::default(),
            ignored_activities: vec![
                "waiting list".to_string(),
                "web-oriented course".to_string(),
                "distance education".to_string(),
            ],
            reserved_comment_marker: "Vantage College".to_string(),
            standard_timetable_status: "STT".to_string(),
            cancelled_marker: "cancelled".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, contains invalid TOML,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets verbose logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the tuning constants.
    pub fn with_tuning(mut self, tuning: FactorTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Rejects non-positive normalisation bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        let bounds = [
            ("proximity_upper_bound", t.proximity_upper_bound),
            ("short_day_upper_bound_hours", t.short_day_upper_bound_hours),
            ("no_torture_upper_bound_hours", t.no_torture_upper_bound_hours),
            ("distance_upper_bound_minutes", t.distance_upper_bound_minutes),
            ("latest_class_minutes", t.latest_class_minutes),
        ];
        for (name, value) in bounds {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if t.no_torture_daily_tolerance_hours < 0.0 {
            return Err(ConfigError::Invalid(
                "no_torture_daily_tolerance_hours must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an activity label is one the planner ignores.
    pub fn is_ignored_activity(&self, activity: &str) -> bool {
        self.ignored_activities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(activity.trim()))
    }

    /// Whether a status marks the section as cancelled.
    pub fn is_cancelled(&self, status: &str) -> bool {
        status
            .to_lowercase()
            .contains(&self.cancelled_marker.to_lowercase())
    }
}
