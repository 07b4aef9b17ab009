//! Schedule (student state) model.
//!
//! A schedule is one student's in-progress assignment: the courses they
//! asked for, the scheduling factors they chose, and the sections placed
//! so far in each term.
//!
//! # Invariants
//! - The assigned sections of a term never contain two intersecting sections.
//! - Two sections of the same course are only present when they cover
//!   different activities (lecture + lab).

use std::fmt::Write as _;
use std::sync::Arc;

use crate::factors::{FactorContext, FactorSet};

use super::{Course, CourseId, Section, Term, Weekday};

/// One student's scheduling state.
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Display name.
    pub name: String,
    /// Target distinct course count for the first term.
    pub first_term_amount: usize,
    /// Target distinct course count for the second term.
    pub second_term_amount: usize,
    /// Required courses for the first term.
    pub required_first: Vec<Arc<Course>>,
    /// Required courses for the second term.
    pub required_second: Vec<Arc<Course>>,
    /// Electives still open; shrinks as electives are placed or abandoned.
    pub electives: Vec<Arc<Course>>,
    /// Active scheduling factors.
    pub factors: FactorSet,
    /// Term currently being scheduled.
    pub current_term: Term,
    /// Sections assigned in the first term.
    pub first_term_classes: Vec<Arc<Section>>,
    /// Sections assigned in the second term.
    pub second_term_classes: Vec<Arc<Section>>,
}

impl Schedule {
    /// Creates an empty schedule with the default target of 5 courses per term.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_term_amount: 5,
            second_term_amount: 5,
            required_first: Vec::new(),
            required_second: Vec::new(),
            electives: Vec::new(),
            factors: FactorSet::new(),
            current_term: Term::First,
            first_term_classes: Vec::new(),
            second_term_classes: Vec::new(),
        }
    }

    /// Sets the per-term course targets.
    pub fn with_amounts(mut self, first: usize, second: usize) -> Self {
        self.first_term_amount = first;
        self.second_term_amount = second;
        self
    }

    /// Adds a required course for a term.
    pub fn with_required(mut self, term: Term, course: Arc<Course>) -> Self {
        match term {
            Term::First => self.required_first.push(course),
            Term::Second => self.required_second.push(course),
        }
        self
    }

    /// Adds an elective.
    pub fn with_elective(mut self, course: Arc<Course>) -> Self {
        self.electives.push(course);
        self
    }

    /// Sets the active factors.
    pub fn with_factors(mut self, factors: FactorSet) -> Self {
        self.factors = factors;
        self
    }

    /// Required courses of the current term.
    pub fn required_courses(&self) -> &[Arc<Course>] {
        self.required_for(self.current_term)
    }

    /// Required courses of a given term.
    pub fn required_for(&self, term: Term) -> &[Arc<Course>] {
        match term {
            Term::First => &self.required_first,
            Term::Second => &self.required_second,
        }
    }

    /// Target course count of the current term.
    pub fn course_amount(&self) -> usize {
        self.amount_for(self.current_term)
    }

    /// Target course count of a given term.
    pub fn amount_for(&self, term: Term) -> usize {
        match term {
            Term::First => self.first_term_amount,
            Term::Second => self.second_term_amount,
        }
    }

    /// Sections assigned in the current term.
    pub fn classes(&self) -> &[Arc<Section>] {
        self.classes_for(self.current_term)
    }

    /// Sections assigned in a given term.
    pub fn classes_for(&self, term: Term) -> &[Arc<Section>] {
        match term {
            Term::First => &self.first_term_classes,
            Term::Second => &self.second_term_classes,
        }
    }

    fn classes_mut(&mut self) -> &mut Vec<Arc<Section>> {
        match self.current_term {
            Term::First => &mut self.first_term_classes,
            Term::Second => &mut self.second_term_classes,
        }
    }

    /// Whether the course is required in the current term.
    pub fn is_required(&self, course: &CourseId) -> bool {
        self.required_courses().iter().any(|c| &c.id == course)
    }

    /// Whether the course is still an open elective.
    pub fn is_elective(&self, course: &CourseId) -> bool {
        self.electives.iter().any(|c| &c.id == course)
    }

    /// Whether the student asked for this course, as required in the
    /// current term or as an open elective.
    pub fn has_selected(&self, course: &CourseId) -> bool {
        self.is_required(course) || self.is_elective(course)
    }

    /// Whether a section of the course is assigned in the current term.
    pub fn has_course(&self, course: &CourseId) -> bool {
        self.classes().iter().any(|s| s.belongs_to(course))
    }

    /// Distinct courses assigned in the current term.
    pub fn scheduled_course_count(&self) -> usize {
        distinct_courses(self.classes())
    }

    /// Required courses of the current term with no section yet.
    pub fn remaining_required(&self) -> usize {
        self.required_courses()
            .iter()
            .filter(|c| !self.has_course(&c.id))
            .count()
    }

    /// Whether another elective fits: assigned distinct courses are below
    /// the target minus the required courses still to place.
    pub fn has_elective_capacity(&self) -> bool {
        let elective_spaces = self
            .course_amount()
            .saturating_sub(self.remaining_required());
        self.scheduled_course_count() < elective_spaces
    }

    /// Whether the section intersects any assigned section of the current term.
    pub fn conflicts_with(&self, section: &Section) -> bool {
        self.classes().iter().any(|s| s.intersects(section))
    }

    /// Assigns a section in the current term.
    pub fn add_section(&mut self, section: Arc<Section>) {
        let classes = self.classes_mut();
        if !classes
            .iter()
            .any(|s| s.name == section.name && s.belongs_to(&section.course_id()))
        {
            classes.push(section);
        }
    }

    /// Removes every current-term section of the course. Returns how many
    /// sections were removed.
    pub fn remove_course(&mut self, course: &CourseId) -> usize {
        let classes = self.classes_mut();
        let before = classes.len();
        classes.retain(|s| !s.belongs_to(course));
        before - classes.len()
    }

    /// Drops the course from the open electives.
    pub fn remove_elective(&mut self, course: &CourseId) -> bool {
        let before = self.electives.len();
        self.electives.retain(|c| &c.id != course);
        before != self.electives.len()
    }

    /// Whether any active factor disqualifies the section.
    pub fn filter(&self, section: &Section, ctx: &FactorContext<'_>) -> bool {
        self.factors.filter(self, section, ctx)
    }

    /// Sum of all active factor scores for the section.
    pub fn score(&self, section: &Section, ctx: &FactorContext<'_>) -> f64 {
        self.factors.score(self, section, ctx)
    }

    /// Earliest hour any class of the term starts (8 if none).
    pub fn start_of_day(&self, term: Term) -> i32 {
        self.classes_for(term)
            .iter()
            .map(|s| s.start() / 60)
            .min()
            .unwrap_or(8)
    }

    /// Hour by which every class of the term has ended (17 if none).
    pub fn end_of_day(&self, term: Term) -> i32 {
        self.classes_for(term)
            .iter()
            .map(|s| (s.end() + 59) / 60)
            .max()
            .unwrap_or(17)
    }

    /// Renders a Markdown timetable of a term, one row per hour.
    pub fn timetable(&self, term: Term) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}'s Term {} Schedule:", self.name, term);
        out.push_str("| TIME | MONDAY | TUESDAY | WEDNESDAY | THURSDAY | FRIDAY |\n");
        out.push_str("|------|--------|---------|-----------|----------|--------|\n");

        let classes = self.classes_for(term);
        for hour in self.start_of_day(term)..self.end_of_day(term) {
            let _ = write!(out, "|{hour}:00|");
            for day in Weekday::TEACHING {
                let minute = hour * 60;
                if let Some(section) = classes
                    .iter()
                    .find(|s| s.meets_on(day) && s.time.contains(minute))
                {
                    out.push_str(&section.name);
                }
                out.push('|');
            }
            out.push('\n');
        }

        out
    }
}

/// Number of distinct courses among the sections.
pub(crate) fn distinct_courses(sections: &[Arc<Section>]) -> usize {
    let mut seen: Vec<CourseId> = Vec::new();
    for section in sections {
        let id = section.course_id();
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen.len()
}
