use crate::{code::CourseCode, course::Course};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Represents one term of a student's schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Display name (e.g., "Semester 1")
    #[serde(default)]
    pub name: String,
    /// Courses taken this term, usually stand-ins carrying only a code
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Builds a semester of stand-ins from the given codes
    pub fn with_codes(name: impl Into<String>, codes: impl IntoIterator<Item = CourseCode>) -> Self {
        Self {
            name: name.into(),
            courses: codes.into_iter().map(Course::stand_in).collect(),
        }
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.courses.iter().any(|course| &course.code == code)
    }
}

/// The ordered semesters a student plans to take
///
/// Semester order is the temporal axis for prerequisite and corequisite
/// checks and is kept exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub semesters: Vec<Semester>,
}

impl Schedule {
    pub fn new(semesters: Vec<Semester>) -> Self {
        Self { semesters }
    }

    /// Index of the first semester holding the given code
    pub fn semester_of(&self, code: &CourseCode) -> Option<usize> {
        self.semesters
            .iter()
            .position(|semester| semester.contains(code))
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.semester_of(code).is_some()
    }

    /// Every course entry in semester order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters
            .iter()
            .flat_map(|semester| semester.courses.iter())
    }

    /// Distinct codes taken, in the order they first appear
    pub fn taken_codes(&self) -> Vec<CourseCode> {
        let mut seen = HashSet::new();
        self.courses()
            .filter(|course| seen.insert(&course.code))
            .map(|course| course.code.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }
}

impl From<Vec<Semester>> for Schedule {
    fn from(semesters: Vec<Semester>) -> Self {
        Self::new(semesters)
    }
}
