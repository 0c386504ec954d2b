use crate::{code::CourseCode, course::Course, plan::Plan};
use serde::{Deserialize, Serialize};

/// Represents a degree made up of one or more plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Degree {
    /// Degree name (e.g., "Bachelor of Computer Science")
    pub name: String,
    /// Number of units needed to graduate
    pub required_units: u32,
    /// Plans owned by this degree
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl Degree {
    pub fn new(name: impl Into<String>, required_units: u32) -> Self {
        Self {
            name: name.into(),
            required_units,
            plans: Vec::new(),
        }
    }

    /// Adds a plan, recording this degree as its owner
    pub fn add_plan(&mut self, mut plan: Plan) {
        plan.degree = Some(self.name.clone());
        plan.link();
        self.plans.push(plan);
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.add_plan(plan);
        self
    }

    /// Fills in back-references on every plan and course
    pub fn link(&mut self) {
        for plan in &mut self.plans {
            plan.degree = Some(self.name.clone());
            plan.link();
        }
    }

    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.name == name)
    }

    /// Every course declared by any plan, in declaration order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.plans.iter().flat_map(|plan| plan.courses.iter())
    }

    pub fn declares(&self, code: &CourseCode) -> bool {
        self.plans.iter().any(|plan| plan.declares(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_type::PlanType;

    fn code(s: &str) -> CourseCode {
        s.parse().unwrap()
    }

    fn degree() -> Degree {
        Degree::new("Bachelor of Science", 48)
            .with_plan(
                Plan::new("Mathematics", PlanType::Major)
                    .with_course(Course::new(code("MATH1051"), "Calculus I", 1)),
            )
            .with_plan(
                Plan::new("Statistics", PlanType::Minor)
                    .with_course(Course::new(code("STAT1201"), "Scientific Data", 1)),
            )
    }

    #[test]
    fn test_add_plan_sets_back_reference() {
        let degree = degree();

        for plan in &degree.plans {
            assert_eq!(plan.degree.as_deref(), Some("Bachelor of Science"));
        }
        assert!(degree.plan("Statistics").is_some());
        assert!(degree.plan("Physics").is_none());
    }

    #[test]
    fn test_courses_flatten_plans_in_order() {
        let degree = degree();
        let codes: Vec<_> = degree.courses().map(|c| c.code.as_str()).collect();

        assert_eq!(codes, vec!["MATH1051", "STAT1201"]);
        assert!(degree.declares(&code("stat 1201")));
        assert!(!degree.declares(&code("PHYS1001")));
    }
}
