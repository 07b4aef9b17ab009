//! Error types for course planning requests and configuration.
//!
//! The scheduling engine itself never fails: an infeasible course is
//! recorded as data (the schedule loses that course). Errors here are
//! raised before the engine runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// A course identifier that is not in `"SUBJ NUM"` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed course identifier: '{0}' (expected \"SUBJ NUM\")")]
pub struct CourseIdError(pub String);

/// Errors rejecting a scheduling request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request failed shape validation.
    #[error("Invalid scheduling request: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    /// The planner configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RequestError {
    /// Validation problems, if this is a validation failure.
    pub fn problems(&self) -> &[ValidationError] {
        match self {
            RequestError::Invalid(errors) => errors,
            RequestError::Config(_) => &[],
        }
    }
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for planning requests.
pub type Result<T> = std::result::Result<T, RequestError>;
