use crate::code::CourseCode;
use serde::{Deserialize, Serialize};

/// Number of units every course is worth
pub const UNIT_WEIGHT: u32 = 2;

/// Represents a course as declared by the catalog
///
/// Relationships are stored as codes and resolved against the catalog when
/// a schedule is checked, never as links to other `Course` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Normalized course code (e.g., "MATH1051")
    pub code: CourseCode,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Academic level (e.g., 1 for first year)
    #[serde(default = "default_level")]
    pub level: u8,
    /// Whether the declaring plan requires this course
    #[serde(default)]
    pub required: bool,
    /// Courses that must be taken in an earlier semester
    #[serde(default)]
    pub prerequisites: Vec<CourseCode>,
    /// Courses that must be taken in the same semester
    #[serde(default)]
    pub corequisites: Vec<CourseCode>,
    /// Courses that may not appear alongside this one
    #[serde(default)]
    pub incompatibilities: Vec<CourseCode>,
    /// Name of the plan that declares this course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

fn default_level() -> u8 {
    1
}

impl Course {
    pub fn new(code: CourseCode, name: impl Into<String>, level: u8) -> Self {
        Self {
            code,
            name: name.into(),
            level,
            required: false,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            incompatibilities: Vec::new(),
            plan: None,
        }
    }

    /// Builds a schedule entry that carries only a code
    pub fn stand_in(code: CourseCode) -> Self {
        Self::new(code, String::new(), default_level())
    }

    pub fn units(&self) -> u32 {
        UNIT_WEIGHT
    }

    pub fn mark_required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_prerequisites(mut self, codes: impl IntoIterator<Item = CourseCode>) -> Self {
        self.prerequisites.extend(codes);
        self
    }

    pub fn with_corequisites(mut self, codes: impl IntoIterator<Item = CourseCode>) -> Self {
        self.corequisites.extend(codes);
        self
    }

    pub fn with_incompatibilities(mut self, codes: impl IntoIterator<Item = CourseCode>) -> Self {
        self.incompatibilities.extend(codes);
        self
    }

    /// Whether this course was declared by the plan with the given name
    ///
    /// A course with no back-reference belongs to whichever plan holds it.
    pub fn declared_by(&self, plan_name: &str) -> bool {
        self.plan.as_deref().is_none_or(|name| name == plan_name)
    }
}
