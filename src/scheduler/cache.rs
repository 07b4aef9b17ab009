//! Pass-scoped section cache.
//!
//! Holds the materialised section list of every course referenced in a
//! pass. Cancelled and filtered sections are stripped here, never from the
//! catalog's course snapshots. The cache lives exactly as long as one call
//! to the engine and is cleared when the pass ends.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Course, CourseId, Section};

/// Section lists keyed by course, valid for one scheduling pass.
#[derive(Debug, Default)]
pub struct SectionCache {
    sections: HashMap<CourseId, Vec<Arc<Section>>>,
}

impl SectionCache {
    /// Materialises the section lists of the given courses.
    pub fn build<'a>(courses: impl IntoIterator<Item = &'a Arc<Course>>) -> Self {
        let mut sections = HashMap::new();
        for course in courses {
            sections
                .entry(course.id.clone())
                .or_insert_with(|| course.section_list());
        }
        Self { sections }
    }

    /// Sections of a course still in play (empty if unknown).
    pub fn get(&self, course: &CourseId) -> &[Arc<Section>] {
        self.sections
            .get(course)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keeps only the sections of `course` matching the predicate.
    /// Returns how many were removed.
    pub fn retain(&mut self, course: &CourseId, mut keep: impl FnMut(&Section) -> bool) -> usize {
        match self.sections.get_mut(course) {
            Some(list) => {
                let before = list.len();
                list.retain(|s| keep(&**s));
                before - list.len()
            }
            None => 0,
        }
    }

    /// Number of cached courses.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Drops every cached list.
    pub fn clear(&mut self) {
        self.sections.clear();
    }
}
