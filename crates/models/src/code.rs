use serde::{Deserialize, Serialize};
use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
    str::FromStr,
};

/// Custom error type for parsing course codes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ParseCodeError {
    EmptyInput,
}

impl Display for ParseCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptyInput => write!(f, "Course code is empty"),
        }
    }
}

impl std::error::Error for ParseCodeError {}

/// A course identifier with case and whitespace variance removed
///
/// Every construction path normalizes, so two codes that differ only in case
/// or whitespace compare equal (e.g. `"csse 2310"` and `" CSSE2310 "`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Strips all whitespace and uppercases the remaining characters
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CourseCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = Self::normalize(s);
        if code.is_empty() {
            return Err(ParseCodeError::EmptyInput);
        }

        Ok(Self(code))
    }
}

impl TryFrom<String> for CourseCode {
    type Error = ParseCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for CourseCode {
    type Error = ParseCodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

impl Deref for CourseCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
