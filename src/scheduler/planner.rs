//! Two-term planning driver.
//!
//! Validates requests, resolves them into schedules, runs the engine for
//! term 1, moves every schedule to term 2, runs it again, and exports.

use serde::Serialize;

use super::engine::SchedulingEngine;
use super::kpi::PlanSummary;
use crate::catalog::{Campus, CourseCatalog};
use crate::config::PlannerConfig;
use crate::error::{RequestError, Result};
use crate::factors::FactorContext;
use crate::models::{Schedule, Term};
use crate::request::{ExportedSchedule, ScheduleRequest};
use crate::validation::validate_requests;

/// Result of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOutcome {
    /// Finished schedules, in request order.
    pub schedules: Vec<ExportedSchedule>,
    /// Requested against scheduled courses, in request order.
    pub summaries: Vec<PlanSummary>,
}

impl PlanOutcome {
    /// Schedules that fell short of their requested course counts.
    pub fn incomplete(&self) -> impl Iterator<Item = &PlanSummary> {
        self.summaries.iter().filter(|s| !s.is_complete())
    }
}

/// Plans both terms for a batch of students.
///
/// # Example
///
/// ```
/// use course_planner::catalog::InMemoryCatalog;
/// use course_planner::config::PlannerConfig;
/// use course_planner::models::{ClassTime, Course, CourseId, Section, Term, Weekday};
/// use course_planner::request::ScheduleRequest;
/// use course_planner::scheduler::Planner;
///
/// let id = CourseId::new("CPSC", "110");
/// let catalog = InMemoryCatalog::new().with_course(
///     Course::new(id.clone()).with_section(
///         Section::new(&id, "CPSC 110 101", "Lecture", Term::First, ClassTime::hours(9, 10))
///             .with_days([Weekday::Monday]),
///     ),
/// );
///
/// let requests = vec![ScheduleRequest::new("alice")
///     .with_amounts(1, 0)
///     .with_required(Term::First, "CPSC 110")];
///
/// let outcome = Planner::new(&catalog, PlannerConfig::default())
///     .plan(&requests)
///     .unwrap();
///
/// assert_eq!(outcome.schedules[0].first_term_classes[0].name, "CPSC 110 101");
/// assert!(outcome.summaries[0].is_complete());
/// ```
pub struct Planner<'a, C: CourseCatalog + ?Sized> {
    catalog: &'a C,
    campus: Option<&'a dyn Campus>,
    config: PlannerConfig,
}

impl<'a, C: CourseCatalog + ?Sized> Planner<'a, C> {
    /// Creates a planner over a course catalog.
    pub fn new(catalog: &'a C, config: PlannerConfig) -> Self {
        Self {
            catalog,
            campus: None,
            config,
        }
    }

    /// Attaches campus geography for the distance preference.
    pub fn with_campus(mut self, campus: &'a dyn Campus) -> Self {
        self.campus = Some(campus);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn engine(&self) -> SchedulingEngine<'_> {
        let engine = SchedulingEngine::new(&self.config);
        match self.campus {
            Some(campus) => engine.with_campus(campus),
            None => engine,
        }
    }

    fn context(&self) -> FactorContext<'_> {
        let ctx = FactorContext::new(&self.config.tuning);
        match self.campus {
            Some(campus) => ctx.with_campus(campus),
            None => ctx,
        }
    }

    /// Validates, schedules both terms, and exports.
    ///
    /// # Errors
    /// - [`RequestError::Config`] if the configuration is unusable.
    /// - [`RequestError::Invalid`] listing every request-shape problem.
    ///
    /// The engine is never invoked when either check fails.
    pub fn plan(&self, requests: &[ScheduleRequest]) -> Result<PlanOutcome> {
        let mut schedules = self.build_schedules(requests)?;
        self.run_terms(&mut schedules);

        let ctx = self.context();
        Ok(PlanOutcome {
            schedules: schedules.iter().map(ExportedSchedule::from).collect(),
            summaries: schedules
                .iter()
                .map(|s| PlanSummary::calculate(s, &ctx))
                .collect(),
        })
    }

    /// Validates requests and resolves them into fresh schedules.
    pub fn build_schedules(&self, requests: &[ScheduleRequest]) -> Result<Vec<Schedule>> {
        self.config.validate()?;
        validate_requests(requests, self.catalog).map_err(RequestError::Invalid)?;

        requests
            .iter()
            .map(|r| r.to_schedule(self.catalog))
            .collect()
    }

    /// Runs term 1, then term 2, over the same schedules.
    pub fn run_terms(&self, schedules: &mut [Schedule]) {
        let engine = self.engine();

        for term in [Term::First, Term::Second] {
            for schedule in schedules.iter_mut() {
                schedule.current_term = term;
            }
            engine.run(schedules);
        }

        for schedule in schedules.iter() {
            for term in [Term::First, Term::Second] {
                progress!(
                    self.config.verbose,
                    schedule = %schedule.name,
                    %term,
                    "timetable\n{}",
                    schedule.timetable(term)
                );
            }
        }
    }
}

impl<C: CourseCatalog + ?Sized> std::fmt::Debug for Planner<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("campus", &self.campus.is_some())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CampusMap, InMemoryCatalog};
    use crate::factors::{rules::EarlyFilter, FactorSet, SchedulingFactor};
    use crate::models::{ClassTime, Course, CourseId, Section};
    use crate::validation::ValidationErrorKind;

    fn catalog() -> InMemoryCatalog {
        let cpsc110 = CourseId::new("CPSC", "110");
        let cpsc210 = CourseId::new("CPSC", "210");
        let math = CourseId::new("MATH", "100");
        let engl = CourseId::new("ENGL", "112");

        InMemoryCatalog::new()
            .with_course(
                Course::new(cpsc110.clone())
                    .with_section(
                        Section::new(&cpsc110, "CPSC 110 101", "Lecture", Term::First, ClassTime::hours(9, 10))
                            .with_raw_days("Mon Wed Fri"),
                    )
                    .with_section(
                        Section::new(&cpsc110, "CPSC 110 L1A", "Laboratory", Term::First, ClassTime::hours(14, 16))
                            .with_raw_days("Tue"),
                    )
                    .with_section(
                        Section::new(&cpsc110, "CPSC 110 WL1", "Waiting List", Term::First, ClassTime::hours(0, 0)),
                    ),
            )
            .with_course(Course::new(cpsc210.clone()).with_section(
                Section::new(&cpsc210, "CPSC 210 201", "Lecture", Term::Second, ClassTime::hours(11, 12))
                    .with_raw_days("Tue Thu"),
            ))
            .with_course(
                Course::new(math.clone())
                    .with_section(
                        Section::new(&math, "MATH 100 101", "Lecture", Term::First, ClassTime::hours(8, 9))
                            .with_raw_days("Mon Wed Fri"),
                    )
                    .with_section(
                        Section::new(&math, "MATH 100 201", "Lecture", Term::Second, ClassTime::hours(13, 14))
                            .with_raw_days("Mon Wed Fri"),
                    ),
            )
            .with_course(Course::new(engl.clone()).with_section(
                Section::new(&engl, "ENGL 112 001", "Lecture", Term::First, ClassTime::hours(9, 10))
                    .with_raw_days("Mon"),
            ))
    }

    fn class_names(classes: &[crate::request::ExportedSection]) -> Vec<&str> {
        let mut names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_two_term_plan() {
        let catalog = catalog();
        let requests = vec![
            ScheduleRequest::new("alice")
                .with_amounts(2, 2)
                .with_required(Term::First, "CPSC 110")
                .with_required(Term::Second, "CPSC 210")
                .with_elective("MATH 100")
                .with_elective("ENGL 112"),
            ScheduleRequest::new("bob")
                .with_amounts(1, 1)
                .with_required(Term::First, "CPSC 110")
                .with_elective("MATH 100"),
        ];

        let outcome = Planner::new(&catalog, PlannerConfig::default())
            .plan(&requests)
            .unwrap();

        let alice = &outcome.schedules[0];
        // MATH 100 fits at 8:00 and fills the term-1 target before ENGL 112 is tried
        assert_eq!(
            class_names(&alice.first_term_classes),
            vec!["CPSC 110 101", "CPSC 110 L1A", "MATH 100 101"]
        );
        // ENGL 112 has no term-2 section and is abandoned
        assert_eq!(class_names(&alice.second_term_classes), vec!["CPSC 210 201"]);

        let bob = &outcome.schedules[1];
        assert_eq!(class_names(&bob.first_term_classes), vec!["CPSC 110 101", "CPSC 110 L1A"]);
        // no elective capacity left in term 1; MATH 100 lands in term 2
        assert_eq!(class_names(&bob.second_term_classes), vec!["MATH 100 201"]);

        let incomplete: Vec<&str> = outcome.incomplete().map(|s| s.name.as_str()).collect();
        assert_eq!(incomplete, vec!["alice"]);
        assert_eq!(outcome.summaries[0].second_term.shortfall(), 1);
    }

    #[test]
    fn test_second_term_elective_survives_first_term() {
        let biol = CourseId::new("BIOL", "200");
        let arth = CourseId::new("ARTH", "100");
        let catalog = InMemoryCatalog::new()
            .with_course(Course::new(biol.clone()).with_section(
                Section::new(&biol, "BIOL 200 201", "Lecture", Term::Second, ClassTime::hours(10, 11))
                    .with_raw_days("Tue Thu"),
            ))
            .with_course(Course::new(arth.clone()).with_section(
                Section::new(&arth, "ARTH 100 101", "Lecture", Term::First, ClassTime::hours(10, 11))
                    .with_raw_days("Mon Wed"),
            ));
        let requests = vec![ScheduleRequest::new("erin")
            .with_amounts(1, 1)
            .with_elective("BIOL 200")
            .with_elective("ARTH 100")];

        let outcome = Planner::new(&catalog, PlannerConfig::default())
            .plan(&requests)
            .unwrap();

        let erin = &outcome.schedules[0];
        assert_eq!(class_names(&erin.first_term_classes), vec!["ARTH 100 101"]);
        assert_eq!(class_names(&erin.second_term_classes), vec!["BIOL 200 201"]);
        assert!(outcome.summaries[0].is_complete());
    }

    #[test]
    fn test_invalid_request_never_runs() {
        let catalog = catalog();
        let requests = vec![ScheduleRequest::new("alice")
            .with_amounts(1, 0)
            .with_required(Term::First, "PHYS 101")];

        let err = Planner::new(&catalog, PlannerConfig::default())
            .plan(&requests)
            .unwrap_err();
        assert!(matches!(err, RequestError::Invalid(_)));
        assert_eq!(err.problems()[0].kind, ValidationErrorKind::UnknownCourse);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let catalog = catalog();
        let mut config = PlannerConfig::default();
        config.tuning.distance_upper_bound_minutes = 0.0;

        let err = Planner::new(&catalog, config).plan(&[]).unwrap_err();
        assert!(matches!(err, RequestError::Config(_)));
    }

    #[test]
    fn test_factors_and_campus_flow_through() {
        let catalog = catalog();
        let campus = CampusMap::new();
        let no_early = FactorSet::new()
            .with(SchedulingFactor::EarlyFilter(EarlyFilter { earliest_hour: 9 }))
            .with(SchedulingFactor::Distance);
        let requests = vec![
            ScheduleRequest::new("carol")
                .with_amounts(0, 1)
                .with_elective("MATH 100")
                .with_factors(no_early.clone()),
            ScheduleRequest::new("dave")
                .with_amounts(1, 0)
                .with_elective("MATH 100")
                .with_factors(no_early),
        ];

        let planner = Planner::new(&catalog, PlannerConfig::default().with_verbose(true)).with_campus(&campus);
        let outcome = planner.plan(&requests).unwrap();

        // the only term-1 MATH section starts at 8:00 and is filtered out
        let dave = &outcome.schedules[1];
        assert!(dave.first_term_classes.is_empty());
        assert!(dave.second_term_classes.is_empty());
        assert_eq!(outcome.summaries[1].shortfall(), 1);

        let carol = &outcome.schedules[0];
        assert!(carol.first_term_classes.is_empty());
        assert_eq!(class_names(&carol.second_term_classes), vec!["MATH 100 201"]);
    }

    #[test]
    fn test_empty_batch() {
        let catalog = catalog();
        let outcome = Planner::new(&catalog, PlannerConfig::default()).plan(&[]).unwrap();
        assert!(outcome.schedules.is_empty());
        assert!(outcome.summaries.is_empty());
    }
}
