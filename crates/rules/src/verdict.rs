use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Outcome of a check: whether the rules hold, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub satisfied: bool,
    pub message: String,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            satisfied: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            satisfied: false,
            message: message.into(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}
