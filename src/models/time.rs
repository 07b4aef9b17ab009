//! Weekday and time-of-day models.
//!
//! # Time Model
//! All times are minutes since midnight on the day a class meets.
//! Class times are half-open intervals: a class ending at 600 does not
//! overlap one starting at 600.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in a day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A day of the week.
///
/// Deserializes from the upper-case name (`MONDAY`), the capitalised name
/// (`Monday`), or the three-letter abbreviation in either case (`mon`, `Mon`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    #[serde(alias = "Monday", alias = "monday", alias = "Mon", alias = "mon")]
    Monday,
    #[serde(alias = "Tuesday", alias = "tuesday", alias = "Tue", alias = "tue")]
    Tuesday,
    #[serde(alias = "Wednesday", alias = "wednesday", alias = "Wed", alias = "wed")]
    Wednesday,
    #[serde(alias = "Thursday", alias = "thursday", alias = "Thu", alias = "thu")]
    Thursday,
    #[serde(alias = "Friday", alias = "friday", alias = "Fri", alias = "fri")]
    Friday,
    #[serde(alias = "Saturday", alias = "saturday", alias = "Sat", alias = "sat")]
    Saturday,
    #[serde(alias = "Sunday", alias = "sunday", alias = "Sun", alias = "sun")]
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday through Friday.
    pub const TEACHING: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Three-letter abbreviation (`Mon`, `Tue`, ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }

    /// Parses a day token as it appears in catalog data.
    ///
    /// Only the first three letters are significant, case-insensitive.
    /// Qualifier marks (`*`, `^`) are stripped.
    pub fn from_token(token: &str) -> Option<Self> {
        let cleaned: String = token
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(3)
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|day| day.abbreviation().eq_ignore_ascii_case(&cleaned))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A time-of-day interval [start, end) in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassTime {
    /// Start (minutes, inclusive).
    pub start: i32,
    /// End (minutes, exclusive).
    pub end: i32,
}

impl ClassTime {
    /// Creates a new interval.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Creates an interval from whole hours.
    pub fn hours(start_hour: i32, end_hour: i32) -> Self {
        Self::new(start_hour * 60, end_hour * 60)
    }

    /// Length of the interval in minutes.
    #[inline]
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Whether a minute falls within this interval.
    #[inline]
    pub fn contains(&self, minute: i32) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Whether two intervals overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` starts exactly when this interval ends.
    #[inline]
    pub fn abuts(&self, other: &Self) -> bool {
        self.end == other.start
    }
}
