use crate::{config::Limits, verdict::Verdict};
use log::{debug, warn};
use models::{code::CourseCode, course::Course, program::Program};
use std::collections::{HashMap, HashSet};

/// Lookup from normalized code to the catalog's own course entry
///
/// The first declaration of a code wins. A course may be listed by several
/// plans; later copies are only recorded as duplicates when they are declared
/// twice by one plan or disagree with the first declaration.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    by_code: HashMap<&'a CourseCode, &'a Course>,
    /// Distinct courses in declaration order
    order: Vec<&'a Course>,
    duplicates: Vec<&'a CourseCode>,
}

/// Whether two entries for a code describe the same course
///
/// Names and the declaring plan are not compared.
fn same_definition(a: &Course, b: &Course) -> bool {
    a.level == b.level
        && a.required == b.required
        && a.prerequisites == b.prerequisites
        && a.corequisites == b.corequisites
        && a.incompatibilities == b.incompatibilities
}

impl<'a> Catalog<'a> {
    pub fn new(program: &'a Program) -> Self {
        let mut catalog = Self {
            by_code: HashMap::new(),
            order: Vec::new(),
            duplicates: Vec::new(),
        };

        for plan in program.plans() {
            let mut listed = HashSet::new();
            for course in &plan.courses {
                if listed.insert(&course.code) {
                    catalog.insert(course);
                } else {
                    debug!("Plan {} lists {} more than once", plan.name, course.code);
                    catalog.duplicates.push(&course.code);
                }
            }
        }

        debug!(
            "Indexed {} catalog courses ({} duplicate entries)",
            catalog.order.len(),
            catalog.duplicates.len()
        );
        catalog
    }

    fn insert(&mut self, course: &'a Course) {
        match self.by_code.get(&course.code) {
            Some(first) if !same_definition(first, course) => self.duplicates.push(&course.code),
            Some(_) => {}
            None => {
                self.by_code.insert(&course.code, course);
                self.order.push(course);
            }
        }
    }

    /// Resolves a code to the catalog's record for it
    pub fn resolve(&self, code: &CourseCode) -> Option<&'a Course> {
        self.by_code.get(code).copied()
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.by_code.contains_key(code)
    }

    /// Distinct courses in the order the catalog declares them
    pub fn courses(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.order.iter().copied()
    }

    /// Codes with a conflicting or repeated declaration, each reported once
    pub fn duplicates(&self) -> Vec<&'a CourseCode> {
        let mut seen = HashSet::new();
        self.duplicates
            .iter()
            .copied()
            .filter(|code| seen.insert(*code))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn check_name(kind: &str, name: &str, limits: &Limits) -> Option<Verdict> {
    if name.trim().is_empty() {
        return Some(Verdict::fail(format!("{kind} name must not be empty.")));
    }

    check_name_length(kind, name, limits)
}

fn check_name_length(kind: &str, name: &str, limits: &Limits) -> Option<Verdict> {
    let length = name.chars().count();
    (length > limits.max_name_length).then(|| {
        Verdict::fail(format!(
            "{kind} name {name} is longer than {} characters.",
            limits.max_name_length
        ))
    })
}

/// Checks that a catalog is well formed before any schedule is checked
///
/// Reports the first of: a duplicated course code, a degree unit requirement
/// outside the configured range, a course level outside the configured range,
/// a missing or over-long degree or plan name, or an over-long course name.
/// Courses may be nameless.
pub fn check_catalog(program: &Program, limits: &Limits) -> Verdict {
    let catalog = Catalog::new(program);

    if let Some(code) = catalog.duplicates().first() {
        warn!("Catalog declares {code} more than once or with conflicting definitions");
        return Verdict::fail(format!("Duplicate course code: {code}."));
    }

    for degree in program.degrees() {
        if let Some(verdict) = check_name("Degree", &degree.name, limits) {
            return verdict;
        }

        if !(limits.min_degree_units..=limits.max_degree_units).contains(&degree.required_units) {
            return Verdict::fail(format!(
                "Degree {} requires {} units, outside the range {}-{}.",
                degree.name,
                degree.required_units,
                limits.min_degree_units,
                limits.max_degree_units
            ));
        }

        for plan in &degree.plans {
            if let Some(verdict) = check_name("Plan", &plan.name, limits) {
                return verdict;
            }

            for course in &plan.courses {
                if let Some(verdict) = check_name_length("Course", &course.name, limits) {
                    return verdict;
                }

                if !(limits.min_level..=limits.max_level).contains(&course.level) {
                    return Verdict::fail(format!(
                        "{} has level {}, outside the range {}-{}.",
                        course.code, course.level, limits.min_level, limits.max_level
                    ));
                }
            }
        }
    }

    Verdict::pass("Catalog is well formed.")
}
