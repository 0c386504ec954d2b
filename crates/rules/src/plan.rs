use crate::{error::RuleError, verdict::Verdict};
use log::{debug, warn};
use models::{
    code::CourseCode,
    course::{Course, UNIT_WEIGHT},
    plan::Plan,
    plan_type::PlanType,
};
use serde::Serialize;
use std::collections::HashSet;

/// Unit thresholds a plan type must meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanRequirements {
    /// Units needed from courses at or above `advanced_level`
    pub min_advanced_units: u32,
    pub advanced_level: u8,
    pub min_units: u32,
}

impl PlanRequirements {
    pub const MAJOR: Self = Self {
        min_advanced_units: 8,
        advanced_level: 3,
        min_units: 16,
    };
    pub const EXTENDED_MAJOR: Self = Self {
        min_advanced_units: 12,
        advanced_level: 3,
        min_units: 24,
    };
    pub const MINOR: Self = Self {
        min_advanced_units: 4,
        advanced_level: 2,
        min_units: 8,
    };

    /// Looks up the thresholds for a plan's type
    ///
    /// # Returns
    /// * `Ok(None)` for plans with no requirements
    /// * `Err(RuleError::UnknownPlanType)` for a type with no thresholds
    pub fn for_plan(plan: &Plan) -> Result<Option<Self>, RuleError> {
        match &plan.plan_type {
            PlanType::Major => Ok(Some(Self::MAJOR)),
            PlanType::ExtendedMajor => Ok(Some(Self::EXTENDED_MAJOR)),
            PlanType::Minor => Ok(Some(Self::MINOR)),
            PlanType::None => Ok(None),
            PlanType::Unrecognized(plan_type) => {
                warn!("Plan {} has unrecognized type {plan_type:?}", plan.name);
                Err(RuleError::UnknownPlanType {
                    plan: plan.name.clone(),
                    plan_type: plan_type.clone(),
                })
            }
        }
    }
}

/// The plan's own entries for every taken course it declares, once per code
pub fn matched_courses<'a>(plan: &'a Plan, taken: &[CourseCode]) -> Vec<&'a Course> {
    let taken: HashSet<&CourseCode> = taken.iter().collect();
    let mut seen = HashSet::new();

    plan.courses
        .iter()
        .filter(|course| taken.contains(&course.code) && seen.insert(&course.code))
        .collect()
}

/// Checks whether the taken courses satisfy a plan
///
/// Required courses are checked first, then advanced units, then total
/// units. The first failing check is reported.
///
/// # Arguments
/// * `plan` - The plan to check
/// * `taken` - Codes of every course in the student's schedule
///
/// # Returns
/// A [`Verdict`], or a [`RuleError`] if the plan type is unrecognized
pub fn check_plan(plan: &Plan, taken: &[CourseCode]) -> Result<Verdict, RuleError> {
    let Some(requirements) = PlanRequirements::for_plan(plan)? else {
        return Ok(Verdict::pass("Plan has no unit requirements."));
    };

    let matched = matched_courses(plan, taken);

    if let Some(missing) = plan
        .required_courses()
        .find(|required| !matched.iter().any(|course| course.code == required.code))
    {
        return Ok(Verdict::fail(format!(
            "Missing required course: {}.",
            missing.code
        )));
    }

    let units = matched.len() as u32 * UNIT_WEIGHT;
    let advanced_units = matched
        .iter()
        .filter(|course| course.level >= requirements.advanced_level)
        .count() as u32
        * UNIT_WEIGHT;

    debug!(
        "Plan {}: {units} units, {advanced_units} advanced units from {} courses",
        plan.name,
        matched.len()
    );

    if advanced_units < requirements.min_advanced_units {
        return Ok(Verdict::fail(format!(
            "Requires {} units at level {} or above, but only {advanced_units} are taken.",
            requirements.min_advanced_units, requirements.advanced_level
        )));
    }

    if units < requirements.min_units {
        return Ok(Verdict::fail(format!(
            "Requires {} units, but only {units} are taken.",
            requirements.min_units
        )));
    }

    Ok(Verdict::pass("Plan requirements are satisfied."))
}
