//! Wire-shaped planning input and output.
//!
//! Field names follow the camelCase JSON used by clients:
//!
//! ```json
//! {
//!   "name": "alice",
//!   "firstTermAmount": 4,
//!   "secondTermAmount": 4,
//!   "requiredFirstCourses": ["CPSC 110"],
//!   "requiredSecondCourses": ["CPSC 210"],
//!   "electives": ["MATH 100", "ENGL 112"],
//!   "schedulingFactors": [{"name": "early_filter", "earliestHour": 9}]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::CourseCatalog;
use crate::error::{RequestError, Result};
use crate::factors::FactorSet;
use crate::models::{Course, CourseId, Schedule, Section, Term, Weekday};
use crate::validation::ValidationError;

fn default_amount() -> usize {
    5
}

/// One student's scheduling request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Student name, unique within a plan.
    pub name: String,
    /// Target distinct course count for term 1.
    #[serde(default = "default_amount")]
    pub first_term_amount: usize,
    /// Target distinct course count for term 2.
    #[serde(default = "default_amount")]
    pub second_term_amount: usize,
    /// Required term-1 course ids (`"SUBJ NUM"`).
    #[serde(default)]
    pub required_first_courses: Vec<String>,
    /// Required term-2 course ids.
    #[serde(default)]
    pub required_second_courses: Vec<String>,
    /// Elective course ids, either term.
    #[serde(default)]
    pub electives: Vec<String>,
    /// Active scheduling factors.
    #[serde(default)]
    pub scheduling_factors: FactorSet,
}

impl ScheduleRequest {
    /// Creates a request with no courses and the default targets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_term_amount: default_amount(),
            second_term_amount: default_amount(),
            required_first_courses: Vec::new(),
            required_second_courses: Vec::new(),
            electives: Vec::new(),
            scheduling_factors: FactorSet::new(),
        }
    }

    /// Sets the per-term course targets.
    pub fn with_amounts(mut self, first: usize, second: usize) -> Self {
        self.first_term_amount = first;
        self.second_term_amount = second;
        self
    }

    /// Adds a required course for a term.
    pub fn with_required(mut self, term: Term, course: impl Into<String>) -> Self {
        match term {
            Term::First => self.required_first_courses.push(course.into()),
            Term::Second => self.required_second_courses.push(course.into()),
        }
        self
    }

    /// Adds an elective.
    pub fn with_elective(mut self, course: impl Into<String>) -> Self {
        self.electives.push(course.into());
        self
    }

    /// Sets the scheduling factors.
    pub fn with_factors(mut self, factors: FactorSet) -> Self {
        self.scheduling_factors = factors;
        self
    }

    /// Total courses requested over both terms.
    pub fn requested_total(&self) -> usize {
        self.first_term_amount + self.second_term_amount
    }

    /// Total courses offered as options (required plus electives).
    pub fn available_total(&self) -> usize {
        self.required_first_courses.len() + self.required_second_courses.len() + self.electives.len()
    }

    /// Every course id mentioned, in request order.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.required_first_courses
            .iter()
            .chain(&self.required_second_courses)
            .chain(&self.electives)
            .map(String::as_str)
    }

    /// Resolves the request into a fresh schedule.
    ///
    /// # Errors
    /// Returns [`RequestError::Invalid`] listing every id that is malformed
    /// or unknown to the catalog.
    pub fn to_schedule<C: CourseCatalog + ?Sized>(&self, catalog: &C) -> Result<Schedule> {
        let mut problems = Vec::new();
        let mut resolve = |ids: &[String]| -> Vec<Arc<Course>> {
            ids.iter()
                .filter_map(|raw| match resolve_course(catalog, &self.name, raw) {
                    Ok(course) => Some(course),
                    Err(e) => {
                        problems.push(e);
                        None
                    }
                })
                .collect()
        };

        let required_first = resolve(&self.required_first_courses);
        let required_second = resolve(&self.required_second_courses);
        let electives = resolve(&self.electives);

        if !problems.is_empty() {
            return Err(RequestError::Invalid(problems));
        }

        let mut schedule = Schedule::new(self.name.clone())
            .with_amounts(self.first_term_amount, self.second_term_amount)
            .with_factors(self.scheduling_factors.clone());
        schedule.required_first = required_first;
        schedule.required_second = required_second;
        schedule.electives = electives;
        Ok(schedule)
    }
}

/// Parses a course id and looks it up in the catalog.
pub(crate) fn resolve_course<C: CourseCatalog + ?Sized>(
    catalog: &C,
    schedule: &str,
    raw: &str,
) -> std::result::Result<Arc<Course>, ValidationError> {
    let id: CourseId = raw
        .parse()
        .map_err(|e| ValidationError::malformed_course(schedule, e))?;
    catalog
        .course(&id)
        .ok_or_else(|| ValidationError::unknown_course(schedule, &id))
}

/// An assigned section as reported to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSection {
    /// Course id (`"CPSC 110"`).
    pub course: String,
    pub name: String,
    pub status: String,
    pub activity: String,
    pub term: String,
    pub days: Vec<Weekday>,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub instructor: Option<String>,
    pub general_remaining: i32,
}

impl From<&Section> for ExportedSection {
    fn from(section: &Section) -> Self {
        Self {
            course: section.course_id().to_string(),
            name: section.name.clone(),
            status: section.status.clone(),
            activity: section.activity.clone(),
            term: section.term.clone(),
            days: section.days.clone(),
            start_minutes: section.start(),
            end_minutes: section.end(),
            instructor: section.instructor.clone(),
            general_remaining: section.seats.general_remaining,
        }
    }
}

/// A finished schedule as reported to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSchedule {
    pub name: String,
    pub first_term_classes: Vec<ExportedSection>,
    pub second_term_classes: Vec<ExportedSection>,
}

impl From<&Schedule> for ExportedSchedule {
    fn from(schedule: &Schedule) -> Self {
        let export = |term: Term| -> Vec<ExportedSection> {
            schedule
                .classes_for(term)
                .iter()
                .map(|s| ExportedSection::from(&**s))
                .collect()
        };
        Self {
            name: schedule.name.clone(),
            first_term_classes: export(Term::First),
            second_term_classes: export(Term::Second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::factors::SchedulingFactor;
    use crate::models::{ClassTime, Seats};
    use crate::validation::ValidationErrorKind;

    fn catalog() -> InMemoryCatalog {
        let cpsc = CourseId::new("CPSC", "110");
        let math = CourseId::new("MATH", "100");
        InMemoryCatalog::new()
            .with_course(Course::new(cpsc.clone()).with_section(
                Section::new(&cpsc, "CPSC 110 101", "Lecture", Term::First, ClassTime::hours(9, 10))
                    .with_days([Weekday::Monday]),
            ))
            .with_course(Course::new(math))
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "name": "alice",
            "requiredFirstCourses": ["CPSC 110"],
            "electives": ["MATH 100"],
            "schedulingFactors": [{"name": "no_torture"}]
        }"#;
        let request: ScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_term_amount, 5);
        assert_eq!(request.second_term_amount, 5);
        assert!(request.required_second_courses.is_empty());
        assert_eq!(request.scheduling_factors.len(), 1);
        assert_eq!(request.requested_total(), 10);
        assert_eq!(request.available_total(), 2);
        assert_eq!(request.course_ids().collect::<Vec<_>>(), vec!["CPSC 110", "MATH 100"]);
    }

    #[test]
    fn test_to_schedule() {
        let request = ScheduleRequest::new("alice")
            .with_amounts(1, 1)
            .with_required(Term::First, "CPSC 110")
            .with_elective("MATH 100")
            .with_factors(FactorSet::new().with(SchedulingFactor::ShortDay));

        let schedule = request.to_schedule(&catalog()).unwrap();
        assert_eq!(schedule.name, "alice");
        assert_eq!(schedule.required_first.len(), 1);
        assert_eq!(schedule.electives.len(), 1);
        assert_eq!(schedule.factors.len(), 1);
        assert_eq!(schedule.amount_for(Term::Second), 1);
    }

    #[test]
    fn test_to_schedule_reports_every_bad_id() {
        let request = ScheduleRequest::new("bob")
            .with_required(Term::First, "CPSC110")
            .with_elective("PHYS 101");

        let err = request.to_schedule(&catalog()).unwrap_err();
        let kinds: Vec<_> = err.problems().iter().map(|p| p.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![ValidationErrorKind::MalformedCourseId, ValidationErrorKind::UnknownCourse]
        );
    }

    #[test]
    fn test_export_shape() {
        let id = CourseId::new("CPSC", "110");
        let section = Section::new(&id, "CPSC 110 101", "Lecture", Term::First, ClassTime::hours(9, 10))
            .with_days([Weekday::Monday, Weekday::Wednesday])
            .with_instructor("Kiczales, Gregor")
            .with_seats(Seats {
                general_remaining: 12,
                ..Seats::default()
            });

        let mut schedule = Schedule::new("alice");
        schedule.add_section(Arc::new(section));

        let exported = ExportedSchedule::from(&schedule);
        let json = serde_json::to_value(&exported).unwrap();
        assert_eq!(json["name"], "alice");
        let class = &json["firstTermClasses"][0];
        assert_eq!(class["course"], "CPSC 110");
        assert_eq!(class["startMinutes"], 540);
        assert_eq!(class["endMinutes"], 600);
        assert_eq!(class["days"], serde_json::json!(["MONDAY", "WEDNESDAY"]));
        assert_eq!(class["generalRemaining"], 12);
        assert_eq!(class["term"], "1");
        assert!(json["secondTermClasses"].as_array().unwrap().is_empty());
    }
}
