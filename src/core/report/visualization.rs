//! GPA chart generation
//!
//! Renders the semester GPA history as a Mermaid `xychart-beta` bar chart
//! for Markdown reports. The chart is fed `{name, gpa}` pairs from the
//! frozen semester records.

use crate::core::models::SemesterRecord;
use std::fmt::Write;

/// Mermaid chart generator
pub struct MermaidChart;

impl MermaidChart {
    /// Generate a Mermaid bar chart of GPA by semester.
    ///
    /// Returns an empty string when there are no semesters; templates treat
    /// that as "no history available".
    #[must_use]
    pub fn generate_gpa_chart(records: &[SemesterRecord]) -> String {
        if records.is_empty() {
            return String::new();
        }

        let names: Vec<String> = records
            .iter()
            .map(|r| format!("\"{}\"", r.name.replace('"', "'")))
            .collect();
        let values: Vec<String> = records.iter().map(|r| format!("{:.2}", r.gpa)).collect();

        let mut chart = String::new();
        let _ = writeln!(chart, "xychart-beta");
        let _ = writeln!(chart, "    title \"GPA by Semester\"");
        let _ = writeln!(chart, "    x-axis [{}]", names.join(", "));
        let _ = writeln!(chart, "    y-axis \"GPA\" 0 --> 4");
        let _ = writeln!(chart, "    bar [{}]", values.join(", "));

        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, CourseId, Grade, Semester};

    fn record(name: &str, grade: Grade) -> SemesterRecord {
        let mut semester = Semester::new("s1".to_string(), name.to_string());
        semester
            .courses
            .push(Course::new(CourseId(1), String::new(), 3, grade));
        semester.into_record()
    }

    #[test]
    fn empty_history_renders_nothing() {
        assert!(MermaidChart::generate_gpa_chart(&[]).is_empty());
    }

    #[test]
    fn chart_lists_semesters_in_order() {
        let records = vec![record("Fall 2023", Grade::A), record("Spring 2024", Grade::B)];
        let chart = MermaidChart::generate_gpa_chart(&records);

        assert!(chart.starts_with("xychart-beta"));
        assert!(chart.contains("x-axis [\"Fall 2023\", \"Spring 2024\"]"));
        assert!(chart.contains("bar [4.00, 3.00]"));
    }

    #[test]
    fn quotes_in_names_are_sanitized() {
        let records = vec![record("Fall \"23\"", Grade::A)];
        let chart = MermaidChart::generate_gpa_chart(&records);
        assert!(chart.contains("Fall '23'"));
    }
}
