//! Course planning domain models.
//!
//! Provides the core data types the scheduling engine works on.
//!
//! # Domain Mappings
//!
//! | course-planner | Catalog | Student |
//! |----------------|---------|---------|
//! | Course | Course listing | Requested course |
//! | Section | Lecture/lab/tutorial offering | Assigned class |
//! | Schedule | - | Timetable in progress |
//! | ClassTime | Meeting time | Occupied block |

mod course;
mod schedule;
mod section;
mod time;

pub use course::{Course, CourseId};
pub use schedule::Schedule;
pub(crate) use schedule::distinct_courses;
pub use section::{Seats, Section, Term};
pub use time::{ClassTime, Weekday, MINUTES_PER_DAY};
