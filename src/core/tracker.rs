//! Session GPA tracker
//!
//! [`GpaTracker`] owns the working semester and the history of saved
//! semesters for one editing session. All mutations go through explicit
//! `&mut self` operations; nothing is persisted across sessions.

use crate::core::gpa::{compute_gpa, cumulative_gpa};
use crate::core::models::{Course, CourseId, Grade, Semester, SemesterRecord};

/// A single typed edit to a course in the working semester.
///
/// A closed set of update operations replaces open-ended field-name
/// mutation, so an invalid field is a compile-time impossibility.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseUpdate {
    /// Replace the course name
    SetName(String),
    /// Replace the credit hours
    SetCredits(u32),
    /// Replace the letter grade (derived points follow automatically)
    SetGrade(Grade),
}

/// Tracker state: one working semester plus the saved history.
///
/// History records are append-only; no operation mutates or deletes them.
#[derive(Debug, Clone)]
pub struct GpaTracker {
    working: Semester,
    history: Vec<SemesterRecord>,
    next_course_id: u64,
    next_semester_id: u64,
}

impl GpaTracker {
    /// Create a tracker with an empty working semester and no history
    #[must_use]
    pub fn new() -> Self {
        Self {
            working: Semester::new("s1".to_string(), "Semester 1".to_string()),
            history: Vec::new(),
            next_course_id: 1,
            next_semester_id: 2,
        }
    }

    /// The working (in-progress) semester
    #[must_use]
    pub const fn working(&self) -> &Semester {
        &self.working
    }

    /// Saved semesters, oldest first
    #[must_use]
    pub fn history(&self) -> &[SemesterRecord] {
        &self.history
    }

    /// Live GPA of the working semester
    #[must_use]
    pub fn current_gpa(&self) -> f64 {
        compute_gpa(&self.working.courses)
    }

    /// Cumulative GPA over all saved courses plus the working set,
    /// recomputed from scratch
    #[must_use]
    pub fn cumulative_gpa(&self) -> f64 {
        cumulative_gpa(&self.history, &self.working.courses)
    }

    /// Total number of courses across history and the working semester
    #[must_use]
    pub fn course_count(&self) -> usize {
        let saved: usize = self.history.iter().map(SemesterRecord::course_count).sum();
        saved + self.working.courses.len()
    }

    /// Append a new course with default values (credits 3, grade A) to the
    /// working semester and return its id. There is no upper bound on the
    /// number of courses.
    pub fn add_course(&mut self) -> CourseId {
        let id = CourseId(self.next_course_id);
        self.next_course_id += 1;
        self.working.courses.push(Course::with_defaults(id));
        id
    }

    /// Apply a typed update to the course with the given id.
    ///
    /// Returns `true` if a course was updated. An unknown id is ignored and
    /// returns `false`; it is never an error.
    pub fn update_course(&mut self, id: CourseId, update: CourseUpdate) -> bool {
        let Some(course) = self.working.course_mut(id) else {
            return false;
        };

        match update {
            CourseUpdate::SetName(name) => course.name = name,
            CourseUpdate::SetCredits(credits) => course.credits = credits,
            CourseUpdate::SetGrade(grade) => course.grade = grade,
        }
        true
    }

    /// Remove the course with the given id from the working semester.
    ///
    /// Returns `true` if a course was removed; an unknown id is a no-op.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        let before = self.working.courses.len();
        self.working.courses.retain(|c| c.id != id);
        self.working.courses.len() != before
    }

    /// Rename the working semester
    pub fn rename_semester(&mut self, name: String) {
        self.working.name = name;
    }

    /// Commit the working semester to history.
    ///
    /// Freezes the working semester's GPA into a [`SemesterRecord`], appends
    /// it to the history (newest last), and replaces the working semester
    /// with a fresh empty one named `Semester N`.
    ///
    /// # Errors
    /// Fails without any state change when the working semester has no
    /// courses.
    pub fn save_semester(&mut self) -> Result<SemesterRecord, String> {
        if self.working.courses.is_empty() {
            return Err("Cannot save a semester with no courses".to_string());
        }

        let fresh_id = format!("s{}", self.next_semester_id);
        self.next_semester_id += 1;

        let completed = std::mem::replace(
            &mut self.working,
            Semester::new(fresh_id, String::new()),
        );
        let record = completed.into_record();
        self.history.push(record.clone());

        self.working.name = format!("Semester {}", self.history.len() + 1);

        Ok(record)
    }
}

impl Default for GpaTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = GpaTracker::new();

        assert!(tracker.working().courses.is_empty());
        assert!(tracker.history().is_empty());
        assert_eq!(tracker.working().name, "Semester 1");
        assert!((tracker.current_gpa() - 0.0).abs() < f64::EPSILON);
        assert_eq!(tracker.course_count(), 0);
    }

    #[test]
    fn test_add_course_uses_defaults() {
        let mut tracker = GpaTracker::new();
        let id = tracker.add_course();

        let course = tracker.working().course(id).expect("course exists");
        assert!(course.name.is_empty());
        assert_eq!(course.credits, 3);
        assert_eq!(course.grade, Grade::A);
        assert!((tracker.current_gpa() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_course_ids_are_unique() {
        let mut tracker = GpaTracker::new();
        let first = tracker.add_course();
        let second = tracker.add_course();
        assert_ne!(first, second);
    }

    #[test]
    fn test_grade_update_changes_points_and_gpa() {
        let mut tracker = GpaTracker::new();
        let id = tracker.add_course();

        assert!(tracker.update_course(id, CourseUpdate::SetGrade(Grade::B)));

        let course = tracker.working().course(id).expect("course exists");
        assert!((course.points() - 3.0).abs() < f64::EPSILON);
        assert!((tracker.current_gpa() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let mut tracker = GpaTracker::new();
        tracker.add_course();

        let before = tracker.working().courses.clone();
        assert!(!tracker.update_course(CourseId(999), CourseUpdate::SetCredits(6)));
        assert_eq!(tracker.working().courses, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut tracker = GpaTracker::new();
        tracker.add_course();

        let before = tracker.working().courses.clone();
        assert!(!tracker.remove_course(CourseId(999)));
        assert_eq!(tracker.working().courses, before);
    }

    #[test]
    fn test_remove_course() {
        let mut tracker = GpaTracker::new();
        let keep = tracker.add_course();
        let drop = tracker.add_course();

        assert!(tracker.remove_course(drop));
        assert_eq!(tracker.working().courses.len(), 1);
        assert!(tracker.working().course(keep).is_some());
    }

    #[test]
    fn test_save_empty_semester_fails_without_change() {
        let mut tracker = GpaTracker::new();

        let result = tracker.save_semester();
        assert!(result.is_err());
        assert!(tracker.history().is_empty());
        assert_eq!(tracker.working().name, "Semester 1");
    }

    #[test]
    fn test_save_appends_and_resets() {
        let mut tracker = GpaTracker::new();
        tracker.rename_semester("Fall 2024".to_string());
        let id = tracker.add_course();
        tracker.update_course(id, CourseUpdate::SetName("Algorithms".to_string()));

        let record = tracker.save_semester().expect("save succeeds");
        assert_eq!(record.name, "Fall 2024");
        assert!((record.gpa - 4.0).abs() < f64::EPSILON);

        assert_eq!(tracker.history().len(), 1);
        assert!(tracker.working().courses.is_empty());
        assert_eq!(tracker.working().name, "Semester 2");
        assert_ne!(tracker.working().id, record.id);
    }

    #[test]
    fn test_history_survives_working_edits() {
        let mut tracker = GpaTracker::new();
        let id = tracker.add_course();
        tracker.update_course(id, CourseUpdate::SetGrade(Grade::F));
        tracker.save_semester().expect("save succeeds");

        // New edits must not touch the frozen record
        tracker.add_course();
        assert!((tracker.history()[0].gpa - 0.0).abs() < f64::EPSILON);
        assert_eq!(tracker.history()[0].course_count(), 1);
    }

    #[test]
    fn test_cumulative_spans_history_and_working() {
        let mut tracker = GpaTracker::new();
        let id = tracker.add_course();
        tracker.update_course(id, CourseUpdate::SetCredits(4));
        tracker.save_semester().expect("save succeeds");

        let id = tracker.add_course();
        tracker.update_course(id, CourseUpdate::SetCredits(4));
        tracker.update_course(id, CourseUpdate::SetGrade(Grade::B));

        // 4 credits of A plus 4 credits of B
        assert!((tracker.cumulative_gpa() - 3.5).abs() < 1e-9);
        assert_eq!(tracker.course_count(), 2);
    }

    #[test]
    fn test_auto_names_increment() {
        let mut tracker = GpaTracker::new();

        for expected in ["Semester 2", "Semester 3", "Semester 4"] {
            tracker.add_course();
            tracker.save_semester().expect("save succeeds");
            assert_eq!(tracker.working().name, expected);
        }
    }
}
