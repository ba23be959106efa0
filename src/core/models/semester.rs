//! Semester models
//!
//! Two shapes share the same course data: [`Semester`] is the in-progress
//! working set whose GPA is recomputed live, and [`SemesterRecord`] is a
//! completed semester whose GPA was computed once at save time and frozen.
//! History records are never mutated or deleted.

use crate::core::gpa::compute_gpa;
use crate::core::models::{Course, CourseId};
use serde::{Deserialize, Serialize};

/// The working (in-progress) semester being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester identifier (stable within a session)
    pub id: String,

    /// Semester name (free text, e.g., "Fall 2024")
    pub name: String,

    /// Courses in insertion order (display order only)
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create a new empty semester
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            courses: Vec::new(),
        }
    }

    /// Live GPA over the current courses (0.0 when empty)
    #[must_use]
    pub fn gpa(&self) -> f64 {
        compute_gpa(&self.courses)
    }

    /// Find a course by id
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Find a course by id, mutably
    pub fn course_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == id)
    }

    /// Total credit hours across all courses
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Freeze this semester into an immutable record, computing its GPA once
    #[must_use]
    pub fn into_record(self) -> SemesterRecord {
        let gpa = compute_gpa(&self.courses);
        SemesterRecord {
            id: self.id,
            name: self.name,
            courses: self.courses,
            gpa,
        }
    }
}

/// A completed semester with its GPA frozen at save time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterRecord {
    /// Semester identifier
    pub id: String,

    /// Semester name
    pub name: String,

    /// Courses as they were at save time
    pub courses: Vec<Course>,

    /// GPA computed at save time
    pub gpa: f64,
}

impl SemesterRecord {
    /// Total credit hours across all courses
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Number of courses in the record
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn course(id: u64, credits: u32, grade: Grade) -> Course {
        Course::new(CourseId(id), format!("Course {id}"), credits, grade)
    }

    #[test]
    fn test_empty_semester() {
        let semester = Semester::new("s1".to_string(), "Fall 2024".to_string());

        assert!(semester.courses.is_empty());
        assert!((semester.gpa() - 0.0).abs() < f64::EPSILON);
        assert_eq!(semester.total_credits(), 0);
    }

    #[test]
    fn test_live_gpa_recomputes() {
        let mut semester = Semester::new("s1".to_string(), "Fall 2024".to_string());
        semester.courses.push(course(1, 4, Grade::A));
        assert!((semester.gpa() - 4.0).abs() < f64::EPSILON);

        semester.courses.push(course(2, 4, Grade::B));
        assert!((semester.gpa() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_course_lookup() {
        let mut semester = Semester::new("s1".to_string(), "Fall 2024".to_string());
        semester.courses.push(course(5, 3, Grade::C));

        assert!(semester.course(CourseId(5)).is_some());
        assert!(semester.course(CourseId(99)).is_none());

        semester.course_mut(CourseId(5)).expect("found").grade = Grade::A;
        assert_eq!(semester.course(CourseId(5)).expect("found").grade, Grade::A);
    }

    #[test]
    fn test_into_record_freezes_gpa() {
        let mut semester = Semester::new("s1".to_string(), "Spring 2025".to_string());
        semester.courses.push(course(1, 3, Grade::A));
        semester.courses.push(course(2, 3, Grade::B));

        let record = semester.into_record();
        assert_eq!(record.name, "Spring 2025");
        assert_eq!(record.course_count(), 2);
        assert_eq!(record.total_credits(), 6);
        assert!((record.gpa - 3.5).abs() < 1e-9);
    }
}
