//! Built-in scheduling factors.
//!
//! # Categories
//!
//! - **Hard filters**: days, early/late cutoff, instructor blacklist
//! - **Day shape**: short day, proximity, no torture
//! - **Time of day**: early/late preference
//! - **Location**: walking distance between back-to-back classes
//! - **People**: instructor preference
//!
//! # Score Convention
//! Scores lie in `[0.0, 1.0]`; higher = more preferred. Filters return
//! `true` to disqualify.

use serde::{Deserialize, Serialize};

use super::{Factor, FactorContext, FactorScore};
use crate::models::{Schedule, Section, Weekday, MINUTES_PER_DAY};

/// Assigned sections of the current term meeting on `day`, excluding the
/// candidate itself when it is already assigned.
fn classes_on<'a>(
    schedule: &'a Schedule,
    section: &'a Section,
    day: Weekday,
) -> impl Iterator<Item = &'a Section> + 'a {
    schedule
        .classes()
        .iter()
        .map(|s| &**s)
        .filter(move |s| s.meets_on(day) && !same_offering(s, section))
}

fn same_offering(a: &Section, b: &Section) -> bool {
    a.name == b.name && a.subject == b.subject && a.number == b.number
}

fn matches_instructor(instructors: &[String], section: &Section) -> bool {
    match &section.instructor {
        Some(name) => {
            let name = name.to_lowercase();
            instructors.iter().any(|i| i.to_lowercase() == name)
        }
        None => false,
    }
}

// ======================== Hard filters ========================

/// Rejects sections meeting on any of the listed days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaysFilter {
    pub days: Vec<Weekday>,
}

impl Factor for DaysFilter {
    fn name(&self) -> &'static str {
        "days_filter"
    }

    fn filter(&self, _schedule: &Schedule, section: &Section, _ctx: &FactorContext<'_>) -> bool {
        section.days.iter().any(|d| self.days.contains(d))
    }
}

/// Rejects sections starting before `earliest_hour`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyFilter {
    pub earliest_hour: i32,
}

impl Factor for EarlyFilter {
    fn name(&self) -> &'static str {
        "early_filter"
    }

    fn filter(&self, _schedule: &Schedule, section: &Section, _ctx: &FactorContext<'_>) -> bool {
        section.start() < self.earliest_hour * 60
    }
}

/// Rejects sections starting after `latest_hour`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LateFilter {
    pub latest_hour: i32,
}

impl Factor for LateFilter {
    fn name(&self) -> &'static str {
        "late_filter"
    }

    fn filter(&self, _schedule: &Schedule, section: &Section, _ctx: &FactorContext<'_>) -> bool {
        section.start() > self.latest_hour * 60
    }
}

/// Rejects sections taught by any listed instructor (case-insensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorFilter {
    pub instructors: Vec<String>,
}

impl Factor for InstructorFilter {
    fn name(&self) -> &'static str {
        "instructor_filter"
    }

    fn filter(&self, _schedule: &Schedule, section: &Section, _ctx: &FactorContext<'_>) -> bool {
        matches_instructor(&self.instructors, section)
    }
}

// ======================== Preferences ========================

/// Fraction of the section's meeting days that are preferred days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaysPreference {
    pub days: Vec<Weekday>,
}

impl Factor for DaysPreference {
    fn name(&self) -> &'static str {
        "days_preference"
    }

    fn score(&self, _schedule: &Schedule, section: &Section, _ctx: &FactorContext<'_>) -> FactorScore {
        if section.days.is_empty() {
            return 0.0;
        }
        let preferred = section.days.iter().filter(|d| self.days.contains(d)).count();
        preferred as f64 / section.days.len() as f64
    }
}

/// 1.0 when the section is taught by a listed instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorPreference {
    pub instructors: Vec<String>,
}

impl Factor for InstructorPreference {
    fn name(&self) -> &'static str {
        "instructor_preference"
    }

    fn score(&self, _schedule: &Schedule, section: &Section, _ctx: &FactorContext<'_>) -> FactorScore {
        if matches_instructor(&self.instructors, section) {
            1.0
        } else {
            0.0
        }
    }
}

/// Prefers early starts: linear from 1.0 at midnight to 0.0 at the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyPreference;

impl Factor for EarlyPreference {
    fn name(&self) -> &'static str {
        "early_preference"
    }

    fn score(&self, _schedule: &Schedule, section: &Section, _ctx: &FactorContext<'_>) -> FactorScore {
        let day = MINUTES_PER_DAY as f64;
        ((day - section.start() as f64) / day).clamp(0.0, 1.0)
    }
}

/// Prefers late starts: linear up to the latest class start (8 PM).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatePreference;

impl Factor for LatePreference {
    fn name(&self) -> &'static str {
        "late_preference"
    }

    fn score(&self, _schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> FactorScore {
        (section.start() as f64 / ctx.tuning.latest_class_minutes).clamp(0.0, 1.0)
    }
}

/// Prefers short days.
///
/// Sums, over the five teaching days, the span from the first class start to the
/// last class end as if the candidate were added. The summed span in hours
/// is normalised against 45 (9 hours x 5 days); longer days score lower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortDayPreference;

impl Factor for ShortDayPreference {
    fn name(&self) -> &'static str {
        "short_day"
    }

    fn score(&self, schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> FactorScore {
        let mut span_minutes = 0;

        for day in Weekday::TEACHING {
            let mut bounds: Option<(i32, i32)> = None;
            let candidate = section.meets_on(day).then_some(section);

            for s in classes_on(schedule, section, day).chain(candidate) {
                bounds = Some(match bounds {
                    Some((start, end)) => (start.min(s.start()), end.max(s.end())),
                    None => (s.start(), s.end()),
                });
            }

            if let Some((start, end)) = bounds {
                span_minutes += end - start;
            }
        }

        let span_hours = span_minutes as f64 / 60.0;
        (1.0 - span_hours / ctx.tuning.short_day_upper_bound_hours).max(0.0)
    }
}

/// Prefers classes close together in time.
///
/// On every day the candidate meets, the gaps to the nearest earlier and
/// later class are summed. A back-to-back day earns a bonus; with
/// `punish_hour_breaks`, a gap of exactly one hour costs a penalty. The
/// total is clamped at 0 and normalised against 1000 minutes, inverted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityPreference {
    #[serde(default)]
    pub punish_hour_breaks: bool,
}

impl Factor for ProximityPreference {
    fn name(&self) -> &'static str {
        "proximity"
    }

    fn score(&self, schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> FactorScore {
        let tuning = ctx.tuning;
        let mut proximity = 0.0;

        for &day in &section.days {
            let mut earlier: Option<&Section> = None;
            let mut later: Option<&Section> = None;

            for other in classes_on(schedule, section, day) {
                if other.start() < section.start() {
                    if earlier.map_or(true, |e| other.start() > e.start()) {
                        earlier = Some(other);
                    }
                } else if later.map_or(true, |l| other.start() < l.start()) {
                    later = Some(other);
                }
            }

            let early_gap = earlier.map_or(0, |e| section.start() - e.end());
            let late_gap = later.map_or(0, |l| l.start() - section.end());
            let gap = early_gap + late_gap;

            proximity += gap as f64;

            if gap == 0 && (earlier.is_some() || later.is_some()) {
                proximity -= tuning.back_to_back_bonus;
            }

            let hour_break = (earlier.is_some() && early_gap == tuning.hour_break_minutes)
                || (later.is_some() && late_gap == tuning.hour_break_minutes);
            if self.punish_hour_breaks && hour_break {
                proximity += tuning.hour_break_penalty;
            }
        }

        let proximity: f64 = proximity.max(0.0);
        ((tuning.proximity_upper_bound - proximity) / tuning.proximity_upper_bound).max(0.0)
    }
}

/// Prefers short walks between back-to-back classes.
///
/// For every day the candidate meets, averages the known travel times
/// between its building and the buildings of classes ending exactly when
/// it starts or starting exactly when it ends. Day averages are averaged,
/// normalised against 15 minutes, inverted. Unknown buildings or travel
/// times are left out; with no data at all the factor scores 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistancePreference;

impl Factor for DistancePreference {
    fn name(&self) -> &'static str {
        "distance"
    }

    fn score(&self, schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> FactorScore {
        let Some(campus) = ctx.campus else {
            return 0.0;
        };

        let mut day_averages = Vec::new();

        for &day in &section.days {
            let Some(here) = campus.building(section, day) else {
                continue;
            };

            let walks: Vec<f64> = classes_on(schedule, section, day)
                .filter(|other| other.time.abuts(&section.time) || section.time.abuts(&other.time))
                .filter_map(|other| campus.building(other, day))
                .filter_map(|there| campus.travel_time(there, here))
                .map(|t| t.as_secs_f64() / 60.0)
                .collect();

            if !walks.is_empty() {
                day_averages.push(walks.iter().sum::<f64>() / walks.len() as f64);
            }
        }

        if day_averages.is_empty() {
            return 0.0;
        }

        let average = day_averages.iter().sum::<f64>() / day_averages.len() as f64;
        let bound = ctx.tuning.distance_upper_bound_minutes;
        ((bound - average) / bound).clamp(0.0, 1.0)
    }
}

/// Discourages long back-to-back blocks.
///
/// On every day the candidate meets, finds the contiguous run of classes
/// (each ending exactly when the next starts) the candidate would join.
/// Hours beyond the daily tolerance (3) are summed and normalised against
/// 6; the score falls to 0.0 as the excess grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoTorturePreference;

impl Factor for NoTorturePreference {
    fn name(&self) -> &'static str {
        "no_torture"
    }

    fn score(&self, schedule: &Schedule, section: &Section, ctx: &FactorContext<'_>) -> FactorScore {
        let tuning = ctx.tuning;
        let mut excess_hours = 0.0;

        for &day in &section.days {
            let mut day_classes: Vec<&Section> = classes_on(schedule, section, day).collect();
            day_classes.push(section);
            day_classes.sort_by_key(|s| s.start());

            let Some(index) = day_classes.iter().position(|s| std::ptr::eq(*s, section)) else {
                continue;
            };

            let mut first = index;
            while first > 0 && day_classes[first - 1].end() == day_classes[first].start() {
                first -= 1;
            }

            let mut last = index;
            while last + 1 < day_classes.len()
                && day_classes[last].end() == day_classes[last + 1].start()
            {
                last += 1;
            }

            let run_hours = (day_classes[last].end() - day_classes[first].start()) as f64 / 60.0;
            excess_hours += (run_hours - tuning.no_torture_daily_tolerance_hours).max(0.0);
        }

        (1.0 - excess_hours / tuning.no_torture_upper_bound_hours).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CampusMap;
    use crate::config::FactorTuning;
    use crate::models::{ClassTime, CourseId, Term};
    use std::sync::Arc;
    use std::time::Duration;

    fn make_section(course: &str, name: &str, days: &[Weekday], start: i32, end: i32) -> Section {
        let id: CourseId = course.parse().unwrap();
        Section::new(&id, name, "Lecture", Term::First, ClassTime::new(start, end))
            .with_days(days.iter().copied())
    }

    fn schedule_with(sections: Vec<Section>) -> Schedule {
        let mut schedule = Schedule::new("student");
        for s in sections {
            schedule.add_section(Arc::new(s));
        }
        schedule
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_days_filter() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = Schedule::new("s");
        let rule = DaysFilter {
            days: vec![Weekday::Friday],
        };

        let mwf = make_section("CPSC 110", "A", &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday], 540, 600);
        let tt = make_section("CPSC 110", "B", &[Weekday::Tuesday, Weekday::Thursday], 540, 600);
        assert!(rule.filter(&schedule, &mwf, &ctx));
        assert!(!rule.filter(&schedule, &tt, &ctx));
        assert_eq!(rule.score(&schedule, &mwf, &ctx), 0.0);
    }

    #[test]
    fn test_days_preference() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = Schedule::new("s");
        let rule = DaysPreference {
            days: vec![Weekday::Monday, Weekday::Wednesday],
        };

        let mwf = make_section("CPSC 110", "A", &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday], 540, 600);
        assert!(approx(rule.score(&schedule, &mwf, &ctx), 2.0 / 3.0));

        let no_days = make_section("CPSC 110", "B", &[], 540, 600);
        assert_eq!(rule.score(&schedule, &no_days, &ctx), 0.0);
    }

    #[test]
    fn test_early_and_late_filters() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = Schedule::new("s");
        let eight = make_section("CPSC 110", "A", &[Weekday::Monday], 480, 540);
        let nine = make_section("CPSC 110", "B", &[Weekday::Monday], 540, 600);
        let six_pm = make_section("CPSC 110", "C", &[Weekday::Monday], 1080, 1140);

        let early = EarlyFilter { earliest_hour: 9 };
        assert!(early.filter(&schedule, &eight, &ctx));
        assert!(!early.filter(&schedule, &nine, &ctx));

        let late = LateFilter { latest_hour: 17 };
        assert!(late.filter(&schedule, &six_pm, &ctx));
        assert!(!late.filter(&schedule, &nine, &ctx));
    }

    #[test]
    fn test_early_late_preferences() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = Schedule::new("s");
        let noon = make_section("CPSC 110", "A", &[Weekday::Monday], 720, 780);
        let nine_pm = make_section("CPSC 110", "B", &[Weekday::Monday], 1260, 1320);

        assert!(approx(EarlyPreference.score(&schedule, &noon, &ctx), 0.5));
        assert!(approx(LatePreference.score(&schedule, &noon, &ctx), 0.6));
        assert_eq!(LatePreference.score(&schedule, &nine_pm, &ctx), 1.0);
    }

    #[test]
    fn test_instructor_rules_case_insensitive() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = Schedule::new("s");
        let taught = make_section("CPSC 110", "A", &[Weekday::Monday], 540, 600).with_instructor("Smith, John");
        let untaught = make_section("CPSC 110", "B", &[Weekday::Monday], 540, 600);

        let filter = InstructorFilter {
            instructors: vec!["smith, john".into()],
        };
        assert!(filter.filter(&schedule, &taught, &ctx));
        assert!(!filter.filter(&schedule, &untaught, &ctx));

        let preference = InstructorPreference {
            instructors: vec!["SMITH, JOHN".into()],
        };
        assert_eq!(preference.score(&schedule, &taught, &ctx), 1.0);
        assert_eq!(preference.score(&schedule, &untaught, &ctx), 0.0);
    }

    #[test]
    fn test_short_day() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = schedule_with(vec![make_section("MATH 100", "M", &[Weekday::Monday], 540, 600)]);

        // Mon 9-10 + candidate Mon 10-11 → 2 hours span
        let adjacent = make_section("CPSC 110", "A", &[Weekday::Monday], 600, 660);
        assert!(approx(ShortDayPreference.score(&schedule, &adjacent, &ctx), 1.0 - 2.0 / 45.0));

        // Mon 9-10 + candidate Mon 15-16 → 7 hours span
        let far = make_section("CPSC 110", "B", &[Weekday::Monday], 900, 960);
        assert!(approx(ShortDayPreference.score(&schedule, &far, &ctx), 1.0 - 7.0 / 45.0));

        // Tuesday candidate: Mon 1h + Tue 1h
        let other_day = make_section("CPSC 110", "C", &[Weekday::Tuesday], 900, 960);
        assert!(approx(ShortDayPreference.score(&schedule, &other_day, &ctx), 1.0 - 2.0 / 45.0));

        // weekend meetings do not count toward the span
        let weekend = make_section("CPSC 110", "D", &[Weekday::Monday, Weekday::Saturday], 600, 660);
        assert!(approx(ShortDayPreference.score(&schedule, &weekend, &ctx), 1.0 - 2.0 / 45.0));
    }

    #[test]
    fn test_proximity_prefers_closer() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = schedule_with(vec![make_section("MATH 100", "M", &[Weekday::Monday], 540, 600)]);
        let rule = ProximityPreference::default();

        let back_to_back = make_section("CPSC 110", "A", &[Weekday::Monday], 600, 660);
        let two_hour_gap = make_section("CPSC 110", "B", &[Weekday::Monday], 720, 780);

        // back-to-back → gap 0 with bonus, clamped to 0 → 1.0
        assert_eq!(rule.score(&schedule, &back_to_back, &ctx), 1.0);
        // gap 120 → (1000 - 120) / 1000
        assert!(approx(rule.score(&schedule, &two_hour_gap, &ctx), 0.88));
    }

    #[test]
    fn test_proximity_between_classes() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = schedule_with(vec![
            make_section("MATH 100", "M", &[Weekday::Monday], 480, 540),
            make_section("PHYS 117", "P", &[Weekday::Monday], 780, 840),
        ]);
        let rule = ProximityPreference::default();

        // candidate 10-11: 60 before, 120 after → 180
        let candidate = make_section("CPSC 110", "A", &[Weekday::Monday], 600, 660);
        assert!(approx(rule.score(&schedule, &candidate, &ctx), 0.82));
    }

    #[test]
    fn test_proximity_hour_break_penalty() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = schedule_with(vec![make_section("MATH 100", "M", &[Weekday::Monday], 540, 600)]);
        let candidate = make_section("CPSC 110", "A", &[Weekday::Monday], 660, 720);

        let lenient = ProximityPreference::default();
        let strict = ProximityPreference {
            punish_hour_breaks: true,
        };
        // 60 vs 60 + 90
        assert!(approx(lenient.score(&schedule, &candidate, &ctx), 0.94));
        assert!(approx(strict.score(&schedule, &candidate, &ctx), 0.85));
    }

    #[test]
    fn test_proximity_bounded() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let days = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ];
        let schedule = schedule_with(vec![make_section("MATH 100", "M", &days, 480, 540)]);
        let candidate = make_section("CPSC 110", "A", &days, 1200, 1260);

        // 5 x 660 minutes → beyond the bound
        assert_eq!(ProximityPreference::default().score(&schedule, &candidate, &ctx), 0.0);
    }

    #[test]
    fn test_no_torture_scenario() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = schedule_with(vec![
            make_section("MATH 100", "M", &[Weekday::Monday], 540, 600),
            make_section("PHYS 117", "P", &[Weekday::Monday], 600, 660),
            make_section("CHEM 121", "C", &[Weekday::Monday], 660, 720),
        ]);

        // Mon 12-13 extends the run to 4 hours: 1 hour beyond tolerance
        let extends = make_section("CPSC 110", "A", &[Weekday::Monday], 720, 780);
        let extended = NoTorturePreference.score(&schedule, &extends, &ctx);
        assert!(approx(extended, 1.0 - 1.0 / 6.0));

        // Mon 14-15 stands alone
        let apart = make_section("CPSC 110", "B", &[Weekday::Monday], 840, 900);
        assert_eq!(NoTorturePreference.score(&schedule, &apart, &ctx), 1.0);
        assert!(extended < 1.0);
    }

    #[test]
    fn test_no_torture_floor() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let days = [Weekday::Monday, Weekday::Wednesday, Weekday::Friday];
        let schedule = schedule_with(vec![make_section("MATH 100", "M", &days, 480, 720)]);

        // 4h block + 2h candidate = 6h run each day → 3h excess x 3 days
        let candidate = make_section("CPSC 110", "A", &days, 720, 840);
        assert_eq!(NoTorturePreference.score(&schedule, &candidate, &ctx), 0.0);
    }

    #[test]
    fn test_distance() {
        let tuning = FactorTuning::default();
        let math = make_section("MATH 100", "M", &[Weekday::Monday], 540, 600);
        let candidate = make_section("CPSC 110", "A", &[Weekday::Monday], 600, 660);
        let unrelated = make_section("CPSC 110", "B", &[Weekday::Monday], 720, 780);

        let campus = CampusMap::new()
            .with_location(&math, Weekday::Monday, "MATH")
            .with_location(&candidate, Weekday::Monday, "DMP")
            .with_location(&unrelated, Weekday::Monday, "DMP")
            .with_travel_time("MATH", "DMP", Duration::from_secs(6 * 60));
        let ctx = FactorContext::new(&tuning).with_campus(&campus);
        let schedule = schedule_with(vec![math]);

        // 6 minute walk → (15 - 6) / 15
        assert!(approx(DistancePreference.score(&schedule, &candidate, &ctx), 0.6));
        // not time-adjacent → no data
        assert_eq!(DistancePreference.score(&schedule, &unrelated, &ctx), 0.0);
    }

    #[test]
    fn test_distance_unknown_travel_time_excluded() {
        let tuning = FactorTuning::default();
        let math = make_section("MATH 100", "M", &[Weekday::Monday], 540, 600);
        let phys = make_section("PHYS 117", "P", &[Weekday::Monday], 660, 720);
        let candidate = make_section("CPSC 110", "A", &[Weekday::Monday], 600, 660);

        let campus = CampusMap::new()
            .with_location(&math, Weekday::Monday, "MATH")
            .with_location(&phys, Weekday::Monday, "HENN")
            .with_location(&candidate, Weekday::Monday, "DMP")
            .with_travel_time("DMP", "HENN", Duration::from_secs(3 * 60));
        let ctx = FactorContext::new(&tuning).with_campus(&campus);
        let schedule = schedule_with(vec![math, phys]);

        // MATH→DMP unknown, DMP→HENN 3 minutes → average 3
        assert!(approx(DistancePreference.score(&schedule, &candidate, &ctx), 0.8));
    }

    #[test]
    fn test_distance_without_campus() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let schedule = Schedule::new("s");
        let candidate = make_section("CPSC 110", "A", &[Weekday::Monday], 600, 660);
        assert_eq!(DistancePreference.score(&schedule, &candidate, &ctx), 0.0);
    }

    #[test]
    fn test_assigned_candidate_not_its_own_neighbour() {
        let tuning = FactorTuning::default();
        let ctx = FactorContext::new(&tuning);
        let placed = make_section("CPSC 110", "A", &[Weekday::Monday], 600, 660);
        let schedule = schedule_with(vec![placed.clone()]);

        assert_eq!(NoTorturePreference.score(&schedule, &placed, &ctx), 1.0);
        assert!(approx(ShortDayPreference.score(&schedule, &placed, &ctx), 1.0 - 1.0 / 45.0));
    }
}
