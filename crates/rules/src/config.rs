use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{Display as StrumDisplay, EnumString};

/// How taken courses add up toward a degree's unit requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, EnumString, StrumDisplay)]
pub enum UnitCounting {
    /// Each taken course counts once, however many plans declare it
    #[default]
    #[strum(serialize = "distinct")]
    Distinct,
    /// Each plan counts its own courses, so a shared course counts per plan
    #[strum(to_string = "per-plan", serialize = "per_plan")]
    PerPlan,
}

/// Custom error type for loading limits
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A variable is set but does not parse
    InvalidValue { key: &'static str, value: String },
    /// A minimum is larger than its maximum
    InvertedRange { min: &'static str, max: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidValue { key, value } => write!(f, "Invalid value for {key}: {value:?}"),
            Self::InvertedRange { min, max } => write!(f, "{min} is greater than {max}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Externally supplied bounds on catalogs and schedules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Limits {
    pub min_semesters: usize,
    pub max_semesters: usize,
    pub min_courses_per_semester: usize,
    pub max_courses_per_semester: usize,
    pub min_level: u8,
    pub max_level: u8,
    pub min_degree_units: u32,
    pub max_degree_units: u32,
    /// Longest allowed name for a course, plan or degree
    pub max_name_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_semesters: 1,
            max_semesters: 20,
            min_courses_per_semester: 1,
            max_courses_per_semester: 10,
            min_level: 1,
            max_level: 9,
            min_degree_units: 1,
            max_degree_units: 100,
            max_name_length: 50,
        }
    }
}

/// Parses the variable `key` if `lookup` returns one, keeping `current` otherwise
fn override_with<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    current: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(current),
    }
}

fn ensure_ordered<T: PartialOrd>(
    min: T,
    max: T,
    min_key: &'static str,
    max_key: &'static str,
) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange {
            min: min_key,
            max: max_key,
        });
    }

    Ok(())
}

impl Limits {
    /// Loads limits from the environment (and a `.env` file, if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Builds limits from defaults overridden by whatever `lookup` returns
    ///
    /// # Arguments
    /// * `lookup` - Returns the raw value of a `PLANNER_*` variable, if set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let limits = Self {
            min_semesters: override_with(&lookup, "PLANNER_MIN_SEMESTERS", defaults.min_semesters)?,
            max_semesters: override_with(&lookup, "PLANNER_MAX_SEMESTERS", defaults.max_semesters)?,
            min_courses_per_semester: override_with(
                &lookup,
                "PLANNER_MIN_COURSES_PER_SEMESTER",
                defaults.min_courses_per_semester,
            )?,
            max_courses_per_semester: override_with(
                &lookup,
                "PLANNER_MAX_COURSES_PER_SEMESTER",
                defaults.max_courses_per_semester,
            )?,
            min_level: override_with(&lookup, "PLANNER_MIN_LEVEL", defaults.min_level)?,
            max_level: override_with(&lookup, "PLANNER_MAX_LEVEL", defaults.max_level)?,
            min_degree_units: override_with(
                &lookup,
                "PLANNER_MIN_DEGREE_UNITS",
                defaults.min_degree_units,
            )?,
            max_degree_units: override_with(
                &lookup,
                "PLANNER_MAX_DEGREE_UNITS",
                defaults.max_degree_units,
            )?,
            max_name_length: override_with(
                &lookup,
                "PLANNER_MAX_NAME_LENGTH",
                defaults.max_name_length,
            )?,
        };

        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_ordered(
            self.min_semesters,
            self.max_semesters,
            "PLANNER_MIN_SEMESTERS",
            "PLANNER_MAX_SEMESTERS",
        )?;
        ensure_ordered(
            self.min_courses_per_semester,
            self.max_courses_per_semester,
            "PLANNER_MIN_COURSES_PER_SEMESTER",
            "PLANNER_MAX_COURSES_PER_SEMESTER",
        )?;
        ensure_ordered(
            self.min_level,
            self.max_level,
            "PLANNER_MIN_LEVEL",
            "PLANNER_MAX_LEVEL",
        )?;
        ensure_ordered(
            self.min_degree_units,
            self.max_degree_units,
            "PLANNER_MIN_DEGREE_UNITS",
            "PLANNER_MAX_DEGREE_UNITS",
        )
    }
}

impl UnitCounting {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        override_with(&lookup, "PLANNER_UNIT_COUNTING", Self::default())
    }
}
