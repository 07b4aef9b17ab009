//! Course model.
//!
//! A course is identified by its (subject, number) pair and owns the
//! sections offered for it, keyed by section name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::CourseIdError;

use super::Section;

/// A course identifier such as `CPSC 110`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId {
    /// Subject code.
    pub subject: String,
    /// Course number.
    pub number: String,
}

impl CourseId {
    /// Creates a new identifier.
    pub fn new(subject: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subject, self.number)
    }
}

impl FromStr for CourseId {
    type Err = CourseIdError;

    /// Parses the `"SUBJ NUM"` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(subject), Some(number), None) => Ok(Self::new(subject, number)),
            _ => Err(CourseIdError(s.to_string())),
        }
    }
}

/// A course with its current section snapshot.
///
/// Equality and hashing use only the identifier: two snapshots of the
/// same course with different sections are the same course.
#[derive(Debug, Clone)]
pub struct Course {
    /// Course identifier.
    pub id: CourseId,
    /// Sections keyed by section name.
    pub sections: BTreeMap<String, Arc<Section>>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(id: CourseId) -> Self {
        Self {
            id,
            sections: BTreeMap::new(),
        }
    }

    /// Adds a section, replacing any section with the same name.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections
            .insert(section.name.clone(), Arc::new(section));
        self
    }

    /// Display form `SUBJ NUM`.
    pub fn full_name(&self) -> String {
        self.id.to_string()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Sections in name order.
    pub fn section_list(&self) -> Vec<Arc<Section>> {
        self.sections.values().cloned().collect()
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
