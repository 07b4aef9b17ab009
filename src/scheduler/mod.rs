//! Greedy joint scheduling engine, two-term planner, and plan summaries.
//!
//! # Algorithm
//!
//! `SchedulingEngine` runs one pass per term. Required courses go first,
//! then electives, each in descending priority. Every course is placed
//! activity by activity (lecture, lab, tutorial) into all eligible
//! schedules at once, picking the section with the highest summed factor
//! score. When no section suits the whole group, each schedule retries on
//! its own; a schedule that still fails loses the course.
//!
//! The algorithm is greedy with backtracking scoped to a single course.
//! Committed courses are never revisited.
//!
//! # Summary
//!
//! `PlanSummary` reports requested against scheduled course counts per term.

/// Logs at `info` when verbose, `debug` otherwise.
macro_rules! progress {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

mod cache;
mod engine;
mod kpi;
mod planner;
pub mod priority;

pub use cache::SectionCache;
pub use engine::SchedulingEngine;
pub use kpi::{PlanSummary, TermSummary};
pub use planner::{PlanOutcome, Planner};
