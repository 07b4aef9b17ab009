//! Collaborator interfaces consumed by the planner.
//!
//! Course data and campus geography are fetched upstream (catalog scraping,
//! persistence, map lookups). The planner only reads a fully materialised
//! snapshot through these traits. In-memory implementations are provided
//! for callers that already hold the data.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Course, CourseId, Section, Weekday};

/// Course lookup by identifier.
pub trait CourseCatalog {
    /// Returns the course with its current sections, or `None` if unknown.
    fn course(&self, id: &CourseId) -> Option<Arc<Course>>;
}

/// Campus geography used by the distance preference.
pub trait Campus {
    /// Building hosting `section` on `day`, if known.
    fn building(&self, section: &Section, day: Weekday) -> Option<&str>;

    /// Walking time between two buildings, or `None` when unknown.
    ///
    /// Unknown times are excluded from averaging, never treated as zero.
    fn travel_time(&self, from: &str, to: &str) -> Option<Duration>;
}

/// A catalog backed by a map of courses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    courses: HashMap<CourseId, Arc<Course>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course, replacing any previous snapshot.
    pub fn with_course(mut self, course: Course) -> Self {
        self.insert(course);
        self
    }

    /// Adds a course, replacing any previous snapshot.
    pub fn insert(&mut self, course: Course) {
        self.courses.insert(course.id.clone(), Arc::new(course));
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CourseCatalog for InMemoryCatalog {
    fn course(&self, id: &CourseId) -> Option<Arc<Course>> {
        self.courses.get(id).cloned()
    }
}

/// Section locations and building-to-building walking times.
///
/// Building names are case-insensitive. Travel times are symmetric: a
/// time recorded for (a, b) also answers (b, a).
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    locations: HashMap<(CourseId, String, Weekday), String>,
    travel_times: HashMap<(String, String), Duration>,
}

/// Building placeholders that are not real locations.
const INVALID_BUILDINGS: [&str; 2] = ["to be announced", "no scheduled meeting"];

impl CampusMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where a section meets on a day. Placeholder buildings
    /// (`To Be Announced`, `No Scheduled Meeting`) are ignored.
    pub fn with_location(
        mut self,
        section: &Section,
        day: Weekday,
        building: impl AsRef<str>,
    ) -> Self {
        let building = building.as_ref().trim().to_lowercase();
        if building.is_empty() || INVALID_BUILDINGS.contains(&building.as_str()) {
            return self;
        }
        self.locations
            .insert((section.course_id(), section.name.clone(), day), building);
        self
    }

    /// Records the walking time between two buildings.
    pub fn with_travel_time(
        mut self,
        a: impl AsRef<str>,
        b: impl AsRef<str>,
        time: Duration,
    ) -> Self {
        self.travel_times.insert(
            (a.as_ref().to_lowercase(), b.as_ref().to_lowercase()),
            time,
        );
        self
    }
}

impl Campus for CampusMap {
    fn building(&self, section: &Section, day: Weekday) -> Option<&str> {
        self.locations
            .get(&(section.course_id(), section.name.clone(), day))
            .map(String::as_str)
    }

    fn travel_time(&self, from: &str, to: &str) -> Option<Duration> {
        let from = from.to_lowercase();
        let to = to.to_lowercase();
        if from == to {
            return Some(Duration::ZERO);
        }
        self.travel_times
            .get(&(from.clone(), to.clone()))
            .or_else(|| self.travel_times.get(&(to, from)))
            .copied()
    }
}
