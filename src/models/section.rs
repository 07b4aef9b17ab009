//! Section model.
//!
//! A section is a single offering of one activity (lecture, lab, tutorial)
//! of a course. Sections are read-only snapshots for the duration of a
//! scheduling pass.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClassTime, CourseId, Weekday};

/// An academic term of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Term {
    /// First term (tag `"1"`).
    #[default]
    First,
    /// Second term (tag `"2"`).
    Second,
}

impl Term {
    /// The tag sections carry for this term.
    pub fn tag(self) -> &'static str {
        match self {
            Term::First => "1",
            Term::Second => "2",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Remaining-seat counters, refreshed out-of-band by ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    pub total_remaining: i32,
    pub currently_registered: i32,
    pub general_remaining: i32,
    pub restricted_remaining: i32,
}

/// One offered section of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Subject code (e.g. `CPSC`).
    pub subject: String,
    /// Course number (e.g. `110`).
    pub number: String,
    /// Section name, unique within its course (e.g. `CPSC 110 101`).
    pub name: String,
    /// Activity kind (`Lecture`, `Laboratory`, ...).
    pub activity: String,
    /// Term tag (`"1"`, `"2"`, `"1-2"`).
    pub term: String,
    /// Status flag (`""`, `"Full"`, `"Cancelled"`, `"STT"`).
    pub status: String,
    /// Days the section meets.
    pub days: Vec<Weekday>,
    /// Meeting time.
    pub time: ClassTime,
    /// Free-text comments.
    pub comments: String,
    /// Instructor name, if announced.
    pub instructor: Option<String>,
    /// Seat counters.
    pub seats: Seats,
}

impl Section {
    /// Creates a section with empty status, comments and seat data.
    pub fn new(
        course: &CourseId,
        name: impl Into<String>,
        activity: impl Into<String>,
        term: Term,
        time: ClassTime,
    ) -> Self {
        Self {
            subject: course.subject.clone(),
            number: course.number.clone(),
            name: name.into(),
            activity: activity.into(),
            term: term.tag().to_string(),
            status: String::new(),
            days: Vec::new(),
            time,
            comments: String::new(),
            instructor: None,
            seats: Seats::default(),
        }
    }

    /// Sets the meeting days.
    pub fn with_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    /// Sets the meeting days from raw catalog text (`"Mon Wed Fri"`).
    pub fn with_raw_days(mut self, raw: &str) -> Self {
        self.days = Self::parse_days(raw);
        self
    }

    /// Sets the status flag.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Sets the raw term tag.
    pub fn with_term_tag(mut self, tag: impl Into<String>) -> Self {
        self.term = tag.into();
        self
    }

    /// Sets the seat counters.
    pub fn with_seats(mut self, seats: Seats) -> Self {
        self.seats = seats;
        self
    }

    /// Parses a comma/space-delimited weekday list. Unknown tokens are skipped.
    pub fn parse_days(raw: &str) -> Vec<Weekday> {
        let mut days = Vec::new();
        for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
            if let Some(day) = Weekday::from_token(token) {
                if !days.contains(&day) {
                    days.push(day);
                }
            }
        }
        days
    }

    /// The course this section belongs to.
    pub fn course_id(&self) -> CourseId {
        CourseId::new(&self.subject, &self.number)
    }

    /// Whether this section belongs to the given course.
    pub fn belongs_to(&self, course: &CourseId) -> bool {
        self.subject == course.subject && self.number == course.number
    }

    /// Start, minutes since midnight.
    #[inline]
    pub fn start(&self) -> i32 {
        self.time.start
    }

    /// End, minutes since midnight.
    #[inline]
    pub fn end(&self) -> i32 {
        self.time.end
    }

    /// Length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i32 {
        self.time.duration()
    }

    /// Days this section meets.
    pub fn days_of(&self) -> &[Weekday] {
        &self.days
    }

    /// Whether the section meets on `day`.
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether the section is offered in `term` (tag containment, so `"1-2"`
    /// runs in both terms).
    pub fn runs_in(&self, term: Term) -> bool {
        self.term.contains(term.tag())
    }

    /// Two sections intersect iff they run in a common term, share at least
    /// one day, and their half-open time ranges overlap. A year-long `"1-2"`
    /// section shares a term with both `"1"` and `"2"` sections.
    pub fn intersects(&self, other: &Section) -> bool {
        self.shares_term(other)
            && self.days.iter().any(|d| other.days.contains(d))
            && self.time.overlaps(&other.time)
    }

    fn shares_term(&self, other: &Section) -> bool {
        self.term == other.term
            || [Term::First, Term::Second]
                .into_iter()
                .any(|t| self.runs_in(t) && other.runs_in(t))
    }
}
