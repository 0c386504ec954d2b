use crate::{course::Course, degree::Degree, plan::Plan, semester::Schedule};
use serde::{Deserialize, Serialize};

/// Represents the full catalog, plus optionally a student's schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program name (e.g., "University of Queensland")
    #[serde(default)]
    pub name: String,
    /// Degrees offered
    #[serde(default)]
    pub degrees: Vec<Degree>,
    /// The student's schedule, when stored alongside the catalog
    #[serde(default, skip_serializing_if = "Schedule::is_empty")]
    pub schedule: Schedule,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parses a catalog from JSON and fills in back-references
    ///
    /// # Arguments
    /// * `json` - A string slice containing the serialized program
    ///
    /// # Returns
    /// The linked [`Program`] or the deserialization error
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut program: Self = serde_json::from_str(json)?;
        program.link();

        Ok(program)
    }

    pub fn add_degree(&mut self, mut degree: Degree) {
        degree.link();
        self.degrees.push(degree);
    }

    pub fn with_degree(mut self, degree: Degree) -> Self {
        self.add_degree(degree);
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Fills in back-references on every degree, plan and course
    pub fn link(&mut self) {
        for degree in &mut self.degrees {
            degree.link();
        }
    }

    pub fn degree(&self, name: &str) -> Option<&Degree> {
        self.degrees.iter().find(|degree| degree.name == name)
    }

    pub fn degrees(&self) -> impl Iterator<Item = &Degree> {
        self.degrees.iter()
    }

    /// Every plan across all degrees, in declaration order
    pub fn plans(&self) -> impl Iterator<Item = &Plan> {
        self.degrees.iter().flat_map(|degree| degree.plans.iter())
    }

    /// Every course across all degrees and plans, in declaration order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.plans().flat_map(|plan| plan.courses.iter())
    }
}
