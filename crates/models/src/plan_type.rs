use serde::{Deserialize, Serialize};
use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// Represents the kind of program a plan belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumProperty, EnumIter)]
#[serde(from = "String", into = "String")]
pub enum PlanType {
    #[strum(props(display = "Major", key = "major"))]
    Major,

    #[strum(props(display = "Extended Major", key = "extendedmajor"))]
    ExtendedMajor,

    #[strum(props(display = "Minor", key = "minor"))]
    Minor,

    #[strum(props(display = "None", key = "none"))]
    None,

    /// Any other plan type, kept so that the rule engine can report it
    #[strum(props(display = ""))]
    Unrecognized(String),
}

impl PlanType {
    /// Lowercases and drops separators so "Extended Major", "extended_major"
    /// and "ExtendedMajor" share a key
    fn key(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for PlanType {
    type Err = Infallible;

    /// Never fails; text matching no known key becomes `Unrecognized`
    fn from_str(plan_type: &str) -> Result<Self, Self::Err> {
        let key = Self::key(plan_type);

        Ok(Self::iter()
            .find(|variant| variant.get_str("key") == Some(key.as_str()))
            .unwrap_or_else(|| Self::Unrecognized(plan_type.trim().to_string())))
    }
}

impl From<String> for PlanType {
    fn from(plan_type: String) -> Self {
        match Self::from_str(&plan_type) {
            Ok(plan_type) => plan_type,
            Err(never) => match never {},
        }
    }
}

impl From<PlanType> for String {
    fn from(plan_type: PlanType) -> Self {
        plan_type.to_string()
    }
}

impl Display for PlanType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unrecognized(plan_type) => write!(f, "{plan_type}"),
            _ => write!(f, "{}", self.get_str("display").unwrap_or_default()),
        }
    }
}
