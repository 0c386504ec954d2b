use crate::{code::CourseCode, course::Course, plan_type::PlanType};
use serde::{Deserialize, Serialize};

/// Represents a major, minor or other named group of courses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name (e.g., "Computer Science")
    pub name: String,
    /// Kind of plan, which decides its unit thresholds
    pub plan_type: PlanType,
    /// Courses declared by this plan, in declaration order
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Name of the degree that owns this plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

impl Plan {
    pub fn new(name: impl Into<String>, plan_type: PlanType) -> Self {
        Self {
            name: name.into(),
            plan_type,
            courses: Vec::new(),
            degree: None,
        }
    }

    /// Adds a course, recording this plan as its declarer if it has none
    pub fn add_course(&mut self, mut course: Course) {
        if course.plan.is_none() {
            course.plan = Some(self.name.clone());
        }
        self.courses.push(course);
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.add_course(course);
        self
    }

    /// Fills in missing back-references on every course
    pub fn link(&mut self) {
        for course in &mut self.courses {
            if course.plan.is_none() {
                course.plan = Some(self.name.clone());
            }
        }
    }

    /// Finds the first course this plan declares with the given code
    pub fn course(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.iter().find(|course| &course.code == code)
    }

    pub fn declares(&self, code: &CourseCode) -> bool {
        self.course(code).is_some()
    }

    /// Required courses that this plan declares itself
    pub fn required_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses
            .iter()
            .filter(|course| course.required && course.declared_by(&self.name))
    }
}
