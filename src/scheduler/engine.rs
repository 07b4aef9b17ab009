//! Greedy joint scheduling pass.
//!
//! # Pass
//!
//! 1. Collect every course referenced by any schedule, by role.
//! 2. Strip sections that are cancelled or that every referencing
//!    schedule filters out.
//! 3. Place required courses, then electives, in descending priority.
//! 4. For each course, place one section per activity into all eligible
//!    schedules at once. Fall back to per-schedule placement when no
//!    section suits the whole group.
//! 5. Drop the course from the electives of every schedule that received
//!    all of its activities. A schedule that lost the course keeps it
//!    listed, so a later term can still place it.
//!
//! # Eligibility
//!
//! A schedule is eligible for a course when it selected the course, has no
//! section of it yet this term, and either requires it or still has
//! elective capacity. Eligibility is recomputed for each course.
//!
//! # Recursion
//!
//! The fallback recurses at most once: a group of several schedules
//! retries as singletons, and a singleton never retries. Stack depth is
//! bounded at two regardless of how many schedules share a course.

use std::sync::Arc;

use tracing::debug;

use super::cache::SectionCache;
use super::priority::{self, ElectivePriority, RequiredPriority};
use crate::catalog::Campus;
use crate::config::PlannerConfig;
use crate::factors::FactorContext;
use crate::models::{Course, CourseId, Schedule, Section};

/// Outcome of placing one activity group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// One section was added to every schedule in the group.
    Placed,
    /// The group split; schedules that failed alone were dropped from it.
    Split,
    /// Nothing to place for this activity.
    Skipped,
    /// No section fits; the course was rolled back from the group.
    Unschedulable,
}

/// Assigns course sections to a set of schedules, one term per call.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use course_planner::config::PlannerConfig;
/// use course_planner::models::{ClassTime, Course, CourseId, Schedule, Section, Term, Weekday};
/// use course_planner::scheduler::SchedulingEngine;
///
/// let id = CourseId::new("CPSC", "110");
/// let course = Arc::new(Course::new(id.clone()).with_section(
///     Section::new(&id, "CPSC 110 101", "Lecture", Term::First, ClassTime::hours(9, 10))
///         .with_days([Weekday::Monday, Weekday::Wednesday]),
/// ));
///
/// let mut schedules = vec![
///     Schedule::new("alice").with_required(Term::First, course.clone()),
///     Schedule::new("bob").with_required(Term::First, course),
/// ];
///
/// let config = PlannerConfig::default();
/// SchedulingEngine::new(&config).run(&mut schedules);
///
/// assert!(schedules.iter().all(|s| s.has_course(&id)));
/// ```
#[derive(Clone, Copy)]
pub struct SchedulingEngine<'a> {
    config: &'a PlannerConfig,
    campus: Option<&'a dyn Campus>,
}

impl<'a> SchedulingEngine<'a> {
    /// Creates an engine without campus data.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self {
            config,
            campus: None,
        }
    }

    /// Attaches campus geography for the distance preference.
    pub fn with_campus(mut self, campus: &'a dyn Campus) -> Self {
        self.campus = Some(campus);
        self
    }

    fn context(&self) -> FactorContext<'a> {
        let ctx = FactorContext::new(&self.config.tuning);
        match self.campus {
            Some(campus) => ctx.with_campus(campus),
            None => ctx,
        }
    }

    /// Runs one pass over the schedules' current term.
    ///
    /// Never fails: a course that cannot be placed is simply missing from
    /// the affected schedules afterwards.
    pub fn run(&self, schedules: &mut [Schedule]) {
        let Some(first) = schedules.first() else {
            return;
        };
        let verbose = self.config.verbose;
        let ctx = self.context();
        let _span = tracing::info_span!(
            "scheduling_pass",
            term = %first.current_term,
            schedules = schedules.len()
        )
        .entered();

        let required = collect_courses(schedules.iter().flat_map(|s| s.required_courses()));
        let electives = collect_courses(schedules.iter().flat_map(|s| s.electives.iter()));

        let mut cache = SectionCache::build(required.iter().chain(&electives));
        self.strip_sections(&mut cache, required.iter().chain(&electives), schedules, &ctx);

        let ordered = priority::sort_descending(
            required
                .iter()
                .map(|course| {
                    let p = RequiredPriority::calculate(
                        &course.id,
                        cache.get(&course.id),
                        schedules,
                        self.config,
                    );
                    progress!(
                        verbose,
                        course = %course.id,
                        priority = p.score(),
                        weighted_sections = p.weighted_sections,
                        shared_by = p.shared_by,
                        longest_hours = p.longest_hours,
                        "required course priority"
                    );
                    (p.score(), course)
                })
                .collect(),
        );
        for course in ordered {
            let eligible = eligible_schedules(schedules, &course.id);
            self.schedule_course(course, cache.get(&course.id), eligible, schedules, &ctx);
        }

        let ordered = priority::sort_descending(
            electives
                .iter()
                .map(|course| {
                    let eligible = eligible_schedules(schedules, &course.id);
                    let p = ElectivePriority::calculate(&eligible, schedules, &ctx);
                    progress!(
                        verbose,
                        course = %course.id,
                        priority = p.score(),
                        shared_by = p.shared_by,
                        average_score = p.average_score,
                        "elective priority"
                    );
                    (p.score(), course)
                })
                .collect(),
        );
        for course in ordered {
            let eligible = eligible_schedules(schedules, &course.id);
            self.schedule_course(course, cache.get(&course.id), eligible, schedules, &ctx);
        }

        cache.clear();
    }

    /// Removes cancelled sections and sections every referencing schedule
    /// filters out.
    fn strip_sections<'c>(
        &self,
        cache: &mut SectionCache,
        courses: impl Iterator<Item = &'c Arc<Course>>,
        schedules: &[Schedule],
        ctx: &FactorContext<'_>,
    ) {
        for course in courses {
            let referencing: Vec<&Schedule> = schedules
                .iter()
                .filter(|s| s.has_selected(&course.id))
                .collect();

            let removed = cache.retain(&course.id, |section| {
                !self.config.is_cancelled(&section.status)
                    && !referencing.iter().all(|s| s.filter(section, ctx))
            });

            if removed > 0 {
                debug!(course = %course.id, removed, "stripped sections");
            }
        }
    }

    /// Places every activity of a course into the eligible schedules.
    fn schedule_course(
        &self,
        course: &Course,
        sections: &[Arc<Section>],
        eligible: Vec<usize>,
        schedules: &mut [Schedule],
        ctx: &FactorContext<'_>,
    ) {
        if eligible.is_empty() {
            debug!(course = %course.id, "no eligible schedules");
            return;
        }

        let mut group = eligible.clone();
        for (activity, activity_sections) in group_by_activity(sections) {
            if group.is_empty() {
                break;
            }
            let placement =
                self.place_activity(&course.id, activity, &activity_sections, &mut group, schedules, ctx);
            debug!(course = %course.id, activity, ?placement, "activity placement");
            if placement == Placement::Unschedulable {
                group.clear();
            }
        }

        for &i in &group {
            schedules[i].remove_elective(&course.id);
        }

        let placed = eligible
            .iter()
            .filter(|&&i| schedules[i].has_course(&course.id))
            .count();
        progress!(
            self.config.verbose,
            course = %course.id,
            placed,
            eligible = eligible.len(),
            "scheduled course"
        );
    }

    /// Places one activity group jointly, falling back to singletons.
    fn place_activity(
        &self,
        course: &CourseId,
        activity: &str,
        sections: &[Arc<Section>],
        group: &mut Vec<usize>,
        schedules: &mut [Schedule],
        ctx: &FactorContext<'_>,
    ) -> Placement {
        if group.is_empty() || self.config.is_ignored_activity(activity) {
            return Placement::Skipped;
        }
        let marker = self.config.reserved_comment_marker.as_str();
        if sections.iter().all(|s| s.comments.contains(marker)) {
            return Placement::Skipped;
        }

        match self.best_section(sections, group.as_slice(), schedules, ctx) {
            Some(section) => {
                for &i in group.iter() {
                    if self.config.verbose {
                        let scores = schedules[i].factors.evaluate(&schedules[i], &section, ctx);
                        tracing::info!(
                            schedule = %schedules[i].name,
                            section = %section.name,
                            ?scores,
                            "placed section"
                        );
                    }
                    schedules[i].add_section(Arc::clone(&section));
                }
                Placement::Placed
            }
            None if group.len() > 1 => {
                debug!(%course, activity, group = group.len(), "no joint section, retrying individually");
                let mut kept = Vec::with_capacity(group.len());
                for &i in group.iter() {
                    let mut single = vec![i];
                    let placement =
                        self.place_activity(course, activity, sections, &mut single, schedules, ctx);
                    if placement != Placement::Unschedulable {
                        kept.push(i);
                    }
                }
                *group = kept;
                Placement::Split
            }
            None => {
                for &i in group.iter() {
                    schedules[i].remove_course(course);
                    progress!(
                        self.config.verbose,
                        schedule = %schedules[i].name,
                        %course,
                        activity,
                        "had to remove course"
                    );
                }
                Placement::Unschedulable
            }
        }
    }

    /// Highest-scoring section acceptable to every schedule in the group.
    /// Ties keep catalog order.
    fn best_section(
        &self,
        sections: &[Arc<Section>],
        group: &[usize],
        schedules: &[Schedule],
        ctx: &FactorContext<'_>,
    ) -> Option<Arc<Section>> {
        let term = schedules[group[0]].current_term;
        let candidates: Vec<(f64, &Arc<Section>)> = sections
            .iter()
            .filter(|s| s.runs_in(term) && s.status != self.config.standard_timetable_status)
            .filter(|s| {
                group.iter().all(|&i| {
                    let schedule = &schedules[i];
                    !schedule.conflicts_with(s) && !schedule.filter(s, ctx)
                })
            })
            .map(|s| {
                let score: f64 = group.iter().map(|&i| schedules[i].score(s, ctx)).sum();
                (score, s)
            })
            .collect();

        priority::sort_descending(candidates)
            .into_iter()
            .next()
            .cloned()
    }
}

impl std::fmt::Debug for SchedulingEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulingEngine")
            .field("config", self.config)
            .field("campus", &self.campus.is_some())
            .finish()
    }
}

/// Distinct courses in first-seen order.
fn collect_courses<'c>(courses: impl Iterator<Item = &'c Arc<Course>>) -> Vec<Arc<Course>> {
    let mut seen: Vec<Arc<Course>> = Vec::new();
    for course in courses {
        if !seen.iter().any(|c| c.id == course.id) {
            seen.push(Arc::clone(course));
        }
    }
    seen
}

/// Indices of the schedules that may still receive the course.
fn eligible_schedules(schedules: &[Schedule], course: &CourseId) -> Vec<usize> {
    schedules
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            s.has_selected(course)
                && !s.has_course(course)
                && (s.is_required(course) || s.has_elective_capacity())
        })
        .map(|(i, _)| i)
        .collect()
}

/// Sections grouped by activity, groups in first-seen order.
fn group_by_activity(sections: &[Arc<Section>]) -> Vec<(&str, Vec<Arc<Section>>)> {
    let mut groups: Vec<(&str, Vec<Arc<Section>>)> = Vec::new();
    for section in sections {
        match groups.iter_mut().find(|(a, _)| *a == section.activity) {
            Some((_, list)) => list.push(Arc::clone(section)),
            None => groups.push((section.activity.as_str(), vec![Arc::clone(section)])),
        }
    }
    groups
}
