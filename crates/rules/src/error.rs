use std::fmt::{Display, Formatter, Result as FmtResult};

/// A defect in the catalog that keeps a check from producing a verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A plan carries a type the engine has no thresholds for
    UnknownPlanType { plan: String, plan_type: String },
    /// A degree was requested by a name the program does not offer
    UnknownDegree { degree: String },
}

impl Display for RuleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownPlanType { plan, plan_type } => {
                write!(f, "Plan {plan} has an unrecognized plan type: {plan_type:?}")
            }
            Self::UnknownDegree { degree } => write!(f, "Program offers no degree named {degree:?}"),
        }
    }
}

impl std::error::Error for RuleError {}
