//! GPA computation
//!
//! The GPA of a set of courses is the credit-weighted mean of their
//! grade-point values. These are pure functions over the models; callers
//! recompute from scratch on every edit rather than maintaining an
//! incremental aggregate (course lists are tens of entries at most).

use crate::core::models::{Course, SemesterRecord};

/// Compute the credit-weighted GPA of a collection of courses.
///
/// Returns 0.0 when the collection is empty or when the credit total is
/// zero. The zero-credit-total case is defined to behave like the empty
/// case rather than dividing by zero.
///
/// No rounding is applied; display layers round to 2 decimal places.
#[must_use]
pub fn compute_gpa(courses: &[Course]) -> f64 {
    let total_credits: u32 = courses.iter().map(|c| c.credits).sum();
    if total_credits == 0 {
        return 0.0;
    }

    let quality_points: f64 = courses.iter().map(Course::quality_points).sum();
    quality_points / f64::from(total_credits)
}

/// Compute the cumulative GPA over saved history plus the working courses.
///
/// Applies [`compute_gpa`] to the concatenation of every record's courses
/// and the working set, so the result is independent of how the courses
/// were split across semesters.
#[must_use]
pub fn cumulative_gpa(history: &[SemesterRecord], working: &[Course]) -> f64 {
    let all: Vec<Course> = history
        .iter()
        .flat_map(|record| record.courses.iter().cloned())
        .chain(working.iter().cloned())
        .collect();

    compute_gpa(&all)
}
