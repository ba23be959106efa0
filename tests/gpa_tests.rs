//! Integration tests for GPA computation
//!
//! Exercises the weighted-average GPA math through the public API, including
//! the edge cases around empty course lists and zero-credit totals.

use gpa_track::core::gpa::{compute_gpa, cumulative_gpa};
use gpa_track::core::models::{Course, CourseId, Grade};
use gpa_track::core::tracker::{CourseUpdate, GpaTracker};

fn course(id: u64, credits: u32, grade: Grade) -> Course {
    Course::new(CourseId(id), format!("Course {id}"), credits, grade)
}

#[test]
fn test_empty_course_list_has_zero_gpa() {
    assert!((compute_gpa(&[]) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_single_course_gpa_equals_grade_points() {
    let courses = vec![course(1, 3, Grade::A)];
    assert!((compute_gpa(&courses) - 4.0).abs() < f64::EPSILON);

    let courses = vec![course(1, 3, Grade::CMinus)];
    assert!((compute_gpa(&courses) - 1.7).abs() < f64::EPSILON);
}

#[test]
fn test_gpa_is_credit_weighted() {
    // 4 credits of A (4.0), 3 credits of B+ (3.3), 4 credits of A- (3.7)
    let courses = vec![
        course(1, 4, Grade::A),
        course(2, 3, Grade::BPlus),
        course(3, 4, Grade::AMinus),
    ];

    let expected = (4.0 * 4.0 + 3.0 * 3.3 + 4.0 * 3.7) / 11.0;
    assert!((compute_gpa(&courses) - expected).abs() < 1e-9);
}

#[test]
fn test_all_failing_grades_give_zero() {
    let courses = vec![course(1, 4, Grade::F), course(2, 3, Grade::F)];
    assert!((compute_gpa(&courses) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_total_credits_does_not_divide() {
    let courses = vec![course(1, 0, Grade::A), course(2, 0, Grade::B)];
    let gpa = compute_gpa(&courses);
    assert!(gpa.is_finite());
    assert!((gpa - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_gpa_stays_within_scale_bounds() {
    let courses: Vec<Course> = (1u64..=12)
        .map(|i| {
            let grade = match i % 4 {
                0 => Grade::APlus,
                1 => Grade::BMinus,
                2 => Grade::DPlus,
                _ => Grade::F,
            };
            course(i, (i % 5 + 1) as u32, grade)
        })
        .collect();

    let gpa = compute_gpa(&courses);
    assert!((0.0..=4.0).contains(&gpa));
}

#[test]
fn test_cumulative_gpa_spans_saved_and_working() {
    let mut tracker = GpaTracker::new();

    // Semester 1: 4 credits of A
    let id = tracker.add_course();
    tracker.update_course(id, CourseUpdate::SetCredits(4));
    tracker.save_semester().expect("save succeeds");

    // Working: 4 credits of C
    let id = tracker.add_course();
    tracker.update_course(id, CourseUpdate::SetCredits(4));
    tracker.update_course(id, CourseUpdate::SetGrade(Grade::C));

    // (4*4.0 + 4*2.0) / 8 = 3.0
    assert!((tracker.cumulative_gpa() - 3.0).abs() < 1e-9);
}

#[test]
fn test_cumulative_gpa_with_no_courses_anywhere() {
    assert!((cumulative_gpa(&[], &[]) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_cumulative_matches_flat_computation() {
    let mut tracker = GpaTracker::new();

    let mut all_courses = Vec::new();
    for (credits, grade) in [(4, Grade::A), (3, Grade::BPlus)] {
        let id = tracker.add_course();
        tracker.update_course(id, CourseUpdate::SetCredits(credits));
        tracker.update_course(id, CourseUpdate::SetGrade(grade));
        all_courses.push(course(u64::from(credits), credits, grade));
    }
    tracker.save_semester().expect("save succeeds");

    for (credits, grade) in [(4, Grade::AMinus), (3, Grade::B)] {
        let id = tracker.add_course();
        tracker.update_course(id, CourseUpdate::SetCredits(credits));
        tracker.update_course(id, CourseUpdate::SetGrade(grade));
        all_courses.push(course(u64::from(credits) + 10, credits, grade));
    }

    assert!((tracker.cumulative_gpa() - compute_gpa(&all_courses)).abs() < 1e-9);
}
