//! Data models for `GpaTrack`

pub mod course;
pub mod grade;
pub mod semester;

pub use course::{Course, CourseId};
pub use grade::{Grade, GRADE_SCALE};
pub use semester::{Semester, SemesterRecord};
