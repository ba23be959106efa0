//! Course model

use crate::core::models::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque course identifier, unique and stable within a tracker session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a single graded course
///
/// Grade points are derived from the grade rather than stored, so they can
/// never drift out of sync with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Session-unique identifier
    pub id: CourseId,

    /// Course name (free text, may be empty)
    pub name: String,

    /// Credit hours
    pub credits: u32,

    /// Letter grade received
    pub grade: Grade,
}

/// Default credit hours for a newly added course
pub const DEFAULT_CREDITS: u32 = 3;

/// Default grade for a newly added course
pub const DEFAULT_GRADE: Grade = Grade::A;

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Session-unique identifier
    /// * `name` - Course name
    /// * `credits` - Credit hours
    /// * `grade` - Letter grade
    #[must_use]
    pub const fn new(id: CourseId, name: String, credits: u32, grade: Grade) -> Self {
        Self {
            id,
            name,
            credits,
            grade,
        }
    }

    /// Create a course with default values (credits 3, grade A)
    #[must_use]
    pub const fn with_defaults(id: CourseId) -> Self {
        Self {
            id,
            name: String::new(),
            credits: DEFAULT_CREDITS,
            grade: DEFAULT_GRADE,
        }
    }

    /// Grade-point value derived from the current grade
    #[must_use]
    pub const fn points(&self) -> f64 {
        self.grade.points()
    }

    /// Quality points contributed to a GPA (points × credits)
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.points() * f64::from(self.credits)
    }
}
