use crate::{catalog::Catalog, verdict::Verdict};
use log::{debug, info};
use models::{code::CourseCode, course::Course, semester::Schedule};

/// Semester index of a related course, or `None` when it is missing from the
/// schedule or does not resolve in the catalog
fn placement(catalog: &Catalog, schedule: &Schedule, code: &CourseCode) -> Option<usize> {
    if !catalog.contains(code) {
        debug!("{code} does not resolve in the catalog");
        return None;
    }

    schedule.semester_of(code)
}

/// Checks one scheduled course's own incompatibility, prerequisite and
/// corequisite lists, in that order
fn check_course(
    catalog: &Catalog,
    schedule: &Schedule,
    course: &Course,
    semester: usize,
) -> Option<Verdict> {
    let code = &course.code;

    for other in &course.incompatibilities {
        if other != code && placement(catalog, schedule, other).is_some() {
            return Some(Verdict::fail(format!("{code} is incompatible with {other}.")));
        }
    }

    for prerequisite in &course.prerequisites {
        match placement(catalog, schedule, prerequisite) {
            None => {
                return Some(Verdict::fail(format!(
                    "{code} requires {prerequisite}, but it is not taken."
                )));
            }
            Some(taken) if taken >= semester => {
                return Some(Verdict::fail(format!(
                    "{code} requires {prerequisite} to be taken earlier."
                )));
            }
            Some(_) => {}
        }
    }

    for corequisite in &course.corequisites {
        match placement(catalog, schedule, corequisite) {
            None => {
                return Some(Verdict::fail(format!(
                    "{code} requires {corequisite} as a corequisite, but it is not taken."
                )));
            }
            Some(taken) if taken != semester => {
                return Some(Verdict::fail(format!(
                    "{code} requires {corequisite} to be taken in the same semester."
                )));
            }
            Some(_) => {}
        }
    }

    None
}

/// Checks prerequisite ordering, corequisite placement and incompatibilities
///
/// Scheduled courses are visited in catalog declaration order and their
/// relationships are read from the catalog entry, never from the schedule's
/// stand-in. Only the declaring course's lists are consulted, so a
/// corequisite or incompatibility must be declared on the course it applies
/// to. The first violation found is returned.
pub fn check_relations(catalog: &Catalog, schedule: &Schedule) -> Verdict {
    for course in catalog.courses() {
        let Some(semester) = schedule.semester_of(&course.code) else {
            continue;
        };

        if let Some(verdict) = check_course(catalog, schedule, course, semester) {
            info!("Relational check failed: {verdict}");
            return verdict;
        }
    }

    for course in schedule.courses() {
        if !catalog.contains(&course.code) {
            debug!("{} is scheduled but not in the catalog", course.code);
        }
    }

    Verdict::pass("All course requirements are satisfied.")
}
