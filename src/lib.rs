//! Multi-student course section scheduling.
//!
//! Assigns concrete course sections (lecture, lab, tutorial) to a group of
//! students over two terms. Students who share a course are placed into the
//! same section whenever one suits all of them, each student's timetable
//! stays free of overlaps, and per-student scheduling factors (hard filters
//! and soft preferences) steer the choice.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `CourseId`, `Section`, `Schedule`,
//!   `ClassTime`, `Weekday`, `Term`
//! - **`factors`**: Pluggable filters and scorers (`SchedulingFactor`, `FactorSet`)
//! - **`scheduler`**: The greedy joint engine, the two-term `Planner`, and
//!   `PlanSummary`
//! - **`catalog`**: Course and campus lookups consumed by the planner
//! - **`request`**: Wire-shaped requests and exported schedules
//! - **`validation`**: Request-shape checks (course counts, ids, names)
//! - **`config`**: `PlannerConfig` and factor tuning, TOML loadable
//!
//! # Architecture
//!
//! Course data, campus geography, and transport (HTTP, files) live outside
//! this crate. The planner reads a fully materialised snapshot through the
//! `catalog` traits and never performs I/O while scheduling. Logging goes
//! through `tracing`; no subscriber is installed here.
//!
//! # Example
//!
//! ```
//! use course_planner::prelude::*;
//!
//! let id = CourseId::new("CPSC", "110");
//! let catalog = InMemoryCatalog::new().with_course(
//!     Course::new(id.clone())
//!         .with_section(
//!             Section::new(&id, "CPSC 110 101", "Lecture", Term::First, ClassTime::hours(9, 10))
//!                 .with_raw_days("Mon Wed Fri"),
//!         )
//!         .with_section(
//!             Section::new(&id, "CPSC 110 L1A", "Laboratory", Term::First, ClassTime::hours(14, 16))
//!                 .with_raw_days("Tue"),
//!         ),
//! );
//!
//! let requests: Vec<ScheduleRequest> = serde_json::from_str(r#"[
//!     {"name": "alice", "firstTermAmount": 1, "secondTermAmount": 0,
//!      "requiredFirstCourses": ["CPSC 110"], "requiredSecondCourses": [], "electives": [],
//!      "schedulingFactors": [{"name": "early_filter", "earliestHour": 8}]},
//!     {"name": "bob", "firstTermAmount": 1, "secondTermAmount": 0,
//!      "requiredFirstCourses": ["CPSC 110"]}
//! ]"#).unwrap();
//!
//! let outcome = Planner::new(&catalog, PlannerConfig::default()).plan(&requests).unwrap();
//! assert_eq!(outcome.schedules[0].first_term_classes, outcome.schedules[1].first_term_classes);
//! assert_eq!(outcome.schedules[0].first_term_classes.len(), 2);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod factors;
pub mod models;
pub mod request;
pub mod scheduler;
pub mod validation;

pub use error::{ConfigError, CourseIdError, RequestError, Result};

/// Common imports.
pub mod prelude {
    pub use crate::catalog::{Campus, CampusMap, CourseCatalog, InMemoryCatalog};
    pub use crate::config::{FactorTuning, PlannerConfig};
    pub use crate::error::RequestError;
    pub use crate::factors::{FactorSet, SchedulingFactor};
    pub use crate::models::{ClassTime, Course, CourseId, Schedule, Section, Term, Weekday};
    pub use crate::request::{ExportedSchedule, ExportedSection, ScheduleRequest};
    pub use crate::scheduler::{PlanOutcome, PlanSummary, Planner, SchedulingEngine};
}
