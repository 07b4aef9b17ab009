//! Request-shape validation.
//!
//! Checks every scheduling request before the engine runs and collects all
//! problems rather than stopping at the first. Detects:
//! - More courses requested than offered as options
//! - Malformed course identifiers
//! - Course identifiers unknown to the catalog
//! - Empty and duplicate schedule names

use std::collections::HashSet;

use crate::catalog::CourseCatalog;
use crate::error::CourseIdError;
use crate::models::CourseId;
use crate::request::{resolve_course, ScheduleRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Schedule the problem belongs to.
    pub schedule: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `firstTermAmount + secondTermAmount` exceeds the courses listed.
    TooManyCoursesRequested,
    /// A course id is not in `"SUBJ NUM"` form.
    MalformedCourseId,
    /// A course id is not in the catalog.
    UnknownCourse,
    /// A schedule has an empty name.
    EmptyName,
    /// Two schedules share a name.
    DuplicateName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, schedule: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            schedule: schedule.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed_course(schedule: &str, error: CourseIdError) -> Self {
        Self::new(
            ValidationErrorKind::MalformedCourseId,
            schedule,
            format!("{schedule}: {error}"),
        )
    }

    pub(crate) fn unknown_course(schedule: &str, course: &CourseId) -> Self {
        Self::new(
            ValidationErrorKind::UnknownCourse,
            schedule,
            format!("{schedule}: unknown course '{course}'"),
        )
    }
}

/// Validates a batch of scheduling requests against the catalog.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_requests<C: CourseCatalog + ?Sized>(
    requests: &[ScheduleRequest],
    catalog: &C,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for request in requests {
        let name = request.name.as_str();

        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                name,
                "Schedule name must not be empty",
            ));
        } else if !names.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                name,
                format!("Duplicate schedule name: {name}"),
            ));
        }

        if request.requested_total() > request.available_total() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManyCoursesRequested,
                name,
                format!(
                    "{name}'s schedule requests {} courses but only lists {}",
                    request.requested_total(),
                    request.available_total()
                ),
            ));
        }

        for raw in request.course_ids() {
            if let Err(e) = resolve_course(catalog, name, raw) {
                errors.push(e);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
