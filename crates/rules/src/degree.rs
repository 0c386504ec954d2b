use crate::{
    config::UnitCounting,
    error::RuleError,
    plan::{check_plan, matched_courses},
    verdict::Verdict,
};
use log::{debug, info};
use models::{code::CourseCode, course::UNIT_WEIGHT, degree::Degree};
use std::collections::HashSet;

/// Units the taken courses contribute toward a degree
pub fn degree_units(degree: &Degree, taken: &[CourseCode], counting: UnitCounting) -> u32 {
    let courses = match counting {
        UnitCounting::Distinct => taken
            .iter()
            .filter(|code| degree.declares(code))
            .collect::<HashSet<_>>()
            .len(),
        UnitCounting::PerPlan => degree
            .plans
            .iter()
            .map(|plan| matched_courses(plan, taken).len())
            .sum(),
    };

    courses as u32 * UNIT_WEIGHT
}

/// Checks whether the taken courses satisfy a degree
///
/// Every plan must pass [`check_plan`] first; the first failing plan is
/// reported. The degree's unit total is then compared with its requirement,
/// counted according to `counting`.
pub fn check_degree(
    degree: &Degree,
    taken: &[CourseCode],
    counting: UnitCounting,
) -> Result<Verdict, RuleError> {
    for plan in &degree.plans {
        let verdict = check_plan(plan, taken)?;
        if !verdict.is_satisfied() {
            info!("Degree {}: plan {} failed", degree.name, plan.name);
            return Ok(Verdict::fail(format!(
                "Plan {} does not meet requirements: {}",
                plan.name, verdict.message
            )));
        }
    }

    let units = degree_units(degree, taken, counting);
    debug!(
        "Degree {}: {units} of {} units ({counting})",
        degree.name, degree.required_units
    );

    if units < degree.required_units {
        return Ok(Verdict::fail(format!(
            "Degree requires {} units, but only {units} are taken.",
            degree.required_units
        )));
    }

    Ok(Verdict::pass("Degree requirements are satisfied."))
}
