use crate::{config::Limits, verdict::Verdict};
use log::debug;
use models::semester::Schedule;

/// Checks that a schedule has an allowed number of semesters, each holding an
/// allowed number of courses
pub fn check_schedule(schedule: &Schedule, limits: &Limits) -> Verdict {
    let count = schedule.len();
    debug!("Checking shape of a {count}-semester schedule");

    if !(limits.min_semesters..=limits.max_semesters).contains(&count) {
        return Verdict::fail(format!(
            "Schedule has {count} semesters, but must have between {} and {}.",
            limits.min_semesters, limits.max_semesters
        ));
    }

    for (i, semester) in schedule.semesters.iter().enumerate() {
        let courses = semester.courses.len();
        if !(limits.min_courses_per_semester..=limits.max_courses_per_semester).contains(&courses)
        {
            let name = if semester.name.is_empty() {
                format!("Semester {}", i + 1)
            } else {
                semester.name.clone()
            };

            return Verdict::fail(format!(
                "{name} has {courses} courses, but must have between {} and {}.",
                limits.min_courses_per_semester, limits.max_courses_per_semester
            ));
        }
    }

    Verdict::pass("Schedule is within limits.")
}
