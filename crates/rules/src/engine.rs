use crate::{
    catalog::{Catalog, check_catalog},
    config::{ConfigError, Limits, UnitCounting},
    degree::check_degree,
    error::RuleError,
    plan::check_plan,
    relational::check_relations,
    schedule::check_schedule,
    verdict::Verdict,
};
use log::info;
use models::{code::CourseCode, degree::Degree, plan::Plan, program::Program, semester::Schedule};

/// Runs every check over a catalog and a schedule
///
/// Holds only configuration, so one engine can check any number of
/// snapshots, each independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEngine {
    pub limits: Limits,
    pub unit_counting: UnitCounting,
}

impl RuleEngine {
    pub fn new(limits: Limits, unit_counting: UnitCounting) -> Self {
        Self {
            limits,
            unit_counting,
        }
    }

    /// Builds an engine from `PLANNER_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(Limits::from_env()?, UnitCounting::from_env()?))
    }

    pub fn check_catalog(&self, program: &Program) -> Verdict {
        check_catalog(program, &self.limits)
    }

    pub fn check_schedule(&self, schedule: &Schedule) -> Verdict {
        check_schedule(schedule, &self.limits)
    }

    pub fn check_relations(&self, program: &Program, schedule: &Schedule) -> Verdict {
        check_relations(&Catalog::new(program), schedule)
    }

    pub fn check_plan(&self, plan: &Plan, schedule: &Schedule) -> Result<Verdict, RuleError> {
        check_plan(plan, &schedule.taken_codes())
    }

    pub fn check_degree(&self, degree: &Degree, schedule: &Schedule) -> Result<Verdict, RuleError> {
        check_degree(degree, &schedule.taken_codes(), self.unit_counting)
    }

    /// Catalog integrity, schedule shape and course relationships, which
    /// every degree check depends on
    fn check_snapshot(&self, program: &Program, schedule: &Schedule) -> Verdict {
        let verdict = self.check_catalog(program);
        if !verdict.is_satisfied() {
            return verdict;
        }

        let verdict = self.check_schedule(schedule);
        if !verdict.is_satisfied() {
            return verdict;
        }

        self.check_relations(program, schedule)
    }

    /// Checks one degree, naming it in the failure message
    fn check_degree_named(
        &self,
        degree: &Degree,
        taken: &[CourseCode],
    ) -> Result<Verdict, RuleError> {
        let verdict = check_degree(degree, taken, self.unit_counting)?;
        if verdict.is_satisfied() {
            return Ok(verdict);
        }

        Ok(Verdict::fail(format!(
            "Degree {} does not meet requirements: {}",
            degree.name, verdict.message
        )))
    }

    /// Checks the catalog, the schedule's shape, course relationships and
    /// then every degree, returning the first failure
    ///
    /// The schedule must satisfy all degrees the program offers. Use
    /// [`RuleEngine::check_enrolment`] for a student in a single degree.
    pub fn check(&self, program: &Program, schedule: &Schedule) -> Result<Verdict, RuleError> {
        let verdict = self.check_snapshot(program, schedule);
        if !verdict.is_satisfied() {
            return Ok(verdict);
        }

        let taken: Vec<CourseCode> = schedule.taken_codes();
        for degree in program.degrees() {
            let verdict = self.check_degree_named(degree, &taken)?;
            if !verdict.is_satisfied() {
                return Ok(verdict);
            }
        }

        info!(
            "Schedule of {} semesters satisfies {} degrees",
            schedule.len(),
            program.degrees.len()
        );
        Ok(Verdict::pass("All requirements are satisfied."))
    }

    /// Like [`RuleEngine::check`], but only the named degree must be satisfied
    ///
    /// The whole catalog is still checked for integrity and relationships.
    pub fn check_enrolment(
        &self,
        program: &Program,
        degree_name: &str,
        schedule: &Schedule,
    ) -> Result<Verdict, RuleError> {
        let Some(degree) = program.degree(degree_name) else {
            return Err(RuleError::UnknownDegree {
                degree: degree_name.to_string(),
            });
        };

        let verdict = self.check_snapshot(program, schedule);
        if !verdict.is_satisfied() {
            return Ok(verdict);
        }

        let verdict = self.check_degree_named(degree, &schedule.taken_codes())?;
        if verdict.is_satisfied() {
            info!(
                "Schedule of {} semesters satisfies {}",
                schedule.len(),
                degree.name
            );
            return Ok(Verdict::pass("All requirements are satisfied."));
        }

        Ok(verdict)
    }

    /// Checks the schedule stored alongside the catalog
    pub fn check_program(&self, program: &Program) -> Result<Verdict, RuleError> {
        self.check(program, &program.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::semester::Semester;
    use serde_json::json;

    fn code(s: &str) -> CourseCode {
        s.parse().unwrap()
    }

    fn schedule(semesters: &[&[&str]]) -> Schedule {
        semesters
            .iter()
            .enumerate()
            .map(|(i, list)| {
                Semester::with_codes(format!("Semester {}", i + 1), list.iter().map(|c| code(c)))
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn engine() -> RuleEngine {
        let _ = env_logger::builder().is_test(true).try_init();
        RuleEngine::default()
    }

    fn calculus_catalog() -> Program {
        let catalog = json!({
            "name": "University of Queensland",
            "degrees": [{
                "name": "Bachelor of Mathematics",
                "required_units": 4,
                "plans": [{
                    "name": "Calculus",
                    "plan_type": "None",
                    "courses": [
                        { "code": "MATH1051", "name": "Calculus & Linear Algebra I", "level": 1 },
                        {
                            "code": "MATH1052",
                            "name": "Calculus & Linear Algebra II",
                            "level": 1,
                            "prerequisites": ["MATH1051"]
                        }
                    ]
                }]
            }]
        });

        Program::from_json(&catalog.to_string()).unwrap()
    }

    #[test]
    fn test_calculus_sequence() {
        let program = calculus_catalog();

        let verdict = engine()
            .check(&program, &schedule(&[&["MATH1051"], &["MATH1052"]]))
            .unwrap();
        assert_eq!(verdict, Verdict::pass("All requirements are satisfied."));

        let verdict = engine()
            .check(&program, &schedule(&[&["MATH1052"], &["MATH1051"]]))
            .unwrap();
        assert!(!verdict.is_satisfied());
        assert!(verdict.message.contains("taken earlier"));
        assert!(verdict.message.contains("MATH1051"));
    }

    #[test]
    fn test_check_program_uses_stored_schedule() {
        let program = calculus_catalog().with_schedule(schedule(&[&["MATH1051", "MATH1052"]]));

        assert_eq!(
            engine().check_program(&program).unwrap(),
            Verdict::fail("MATH1052 requires MATH1051 to be taken earlier.")
        );
    }

    #[test]
    fn test_catalog_problems_come_first() {
        let mut program = calculus_catalog();
        program.degrees[0].plans[0].courses[1].code = code("MATH1051");

        // The swapped schedule would fail ordering, but the duplicate is reported
        assert_eq!(
            engine()
                .check(&program, &schedule(&[&["MATH1052"], &["MATH1051"]]))
                .unwrap(),
            Verdict::fail("Duplicate course code: MATH1051.")
        );
    }

    #[test]
    fn test_schedule_shape_before_relations() {
        let engine = RuleEngine::new(
            Limits {
                max_semesters: 1,
                ..Limits::default()
            },
            UnitCounting::Distinct,
        );

        assert_eq!(
            engine
                .check(&calculus_catalog(), &schedule(&[&["MATH1051"], &["MATH1052"]]))
                .unwrap(),
            Verdict::fail("Schedule has 2 semesters, but must have between 1 and 1.")
        );
    }

    #[test]
    fn test_degree_failure_is_attributed() {
        let program = calculus_catalog();

        assert_eq!(
            engine().check(&program, &schedule(&[&["MATH1051"]])).unwrap(),
            Verdict::fail(
                "Degree Bachelor of Mathematics does not meet requirements: \
                 Degree requires 4 units, but only 2 are taken."
            )
        );
    }

    #[test]
    fn test_unknown_plan_type_is_an_error() {
        let catalog = json!({
            "degrees": [{
                "name": "Bachelor of Arts",
                "required_units": 2,
                "plans": [{
                    "name": "Philosophy",
                    "plan_type": "Double Major",
                    "courses": [{ "code": "PHIL1002", "name": "Introduction to Philosophy" }]
                }]
            }]
        });
        let program = Program::from_json(&catalog.to_string()).unwrap();

        let err = engine()
            .check(&program, &schedule(&[&["PHIL1002"]]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Plan Philosophy has an unrecognized plan type: \"Double Major\""
        );
    }

    #[test]
    fn test_plan_and_degree_from_schedule() {
        let program = calculus_catalog();
        let degree = &program.degrees[0];
        let schedule = schedule(&[&["MATH1051"], &["MATH1052"]]);

        assert!(
            engine()
                .check_plan(&degree.plans[0], &schedule)
                .unwrap()
                .is_satisfied()
        );
        assert_eq!(
            engine().check_degree(degree, &schedule).unwrap(),
            Verdict::pass("Degree requirements are satisfied.")
        );
    }

    #[test]
    fn test_nameless_catalog() {
        let catalog = json!({
            "degrees": [{
                "name": "Bachelor of Mathematics",
                "required_units": 4,
                "plans": [{
                    "name": "Calculus",
                    "plan_type": "None",
                    "courses": [
                        { "code": "MATH1051" },
                        { "code": "MATH1052", "prerequisites": ["MATH1051"] }
                    ]
                }]
            }]
        });
        let program = Program::from_json(&catalog.to_string()).unwrap();

        assert_eq!(
            engine()
                .check(&program, &schedule(&[&["MATH1051"], &["MATH1052"]]))
                .unwrap(),
            Verdict::pass("All requirements are satisfied.")
        );
    }

    #[test]
    fn test_shared_course_unit_counting() {
        let catalog = json!({
            "degrees": [{
                "name": "Bachelor of Arts",
                "required_units": 16,
                "plans": [
                    {
                        "name": "Economics",
                        "plan_type": "Minor",
                        "courses": [
                            { "code": "ECON1010", "level": 1 },
                            { "code": "ECON1020", "level": 1 },
                            { "code": "ECON2010", "level": 2 },
                            { "code": "ECON2020", "level": 2 }
                        ]
                    },
                    {
                        "name": "Statistics",
                        "plan_type": "Minor",
                        "courses": [
                            { "code": "STAT1201", "level": 1 },
                            { "code": "STAT2004", "level": 2 },
                            { "code": "STAT2203", "level": 2 },
                            { "code": "ECON2020", "level": 2, "plan": "Economics" }
                        ]
                    }
                ]
            }]
        });
        let program = Program::from_json(&catalog.to_string()).unwrap();
        let schedule = schedule(&[
            &["ECON1010", "ECON1020", "STAT1201"],
            &["ECON2010", "ECON2020", "STAT2004", "STAT2203"],
        ]);

        let per_plan = RuleEngine::new(Limits::default(), UnitCounting::PerPlan);
        assert_eq!(
            per_plan.check(&program, &schedule).unwrap(),
            Verdict::pass("All requirements are satisfied.")
        );

        assert_eq!(
            engine().check(&program, &schedule).unwrap(),
            Verdict::fail(
                "Degree Bachelor of Arts does not meet requirements: \
                 Degree requires 16 units, but only 14 are taken."
            )
        );
    }

    #[test]
    fn test_enrolment_in_one_degree() {
        let mut program = calculus_catalog();
        let arts = json!({
            "degrees": [{
                "name": "Bachelor of Arts",
                "required_units": 8,
                "plans": [{
                    "name": "Economics",
                    "plan_type": "Minor",
                    "courses": [
                        { "code": "ECON1010", "level": 1 },
                        { "code": "ECON2010", "level": 2 }
                    ]
                }]
            }]
        });
        let arts = Program::from_json(&arts.to_string()).unwrap();
        program.degrees.extend(arts.degrees);

        let schedule = schedule(&[&["MATH1051"], &["MATH1052"]]);
        let arts_failure = Verdict::fail(
            "Degree Bachelor of Arts does not meet requirements: \
             Plan Economics does not meet requirements: \
             Requires 4 units at level 2 or above, but only 0 are taken.",
        );

        // Every degree the program offers
        assert_eq!(engine().check(&program, &schedule).unwrap(), arts_failure);

        assert_eq!(
            engine()
                .check_enrolment(&program, "Bachelor of Mathematics", &schedule)
                .unwrap(),
            Verdict::pass("All requirements are satisfied.")
        );
        assert_eq!(
            engine()
                .check_enrolment(&program, "Bachelor of Arts", &schedule)
                .unwrap(),
            arts_failure
        );
        assert_eq!(
            engine()
                .check_enrolment(&program, "Bachelor of Science", &schedule)
                .unwrap_err(),
            RuleError::UnknownDegree {
                degree: "Bachelor of Science".to_string()
            }
        );
    }
}
