//! HTML report generator
//!
//! Generates self-contained HTML GPA reports with embedded CSS. The semester
//! history is rendered as a pure-CSS bar chart so the report needs no
//! external scripts.

use crate::core::models::{SemesterRecord, GRADE_SCALE};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape HTML special characters
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{student}}", &Self::escape_html(ctx.student()));
        output = output.replace("{{institution}}", &Self::escape_html(ctx.institution()));

        output = output.replace(
            "{{cumulative_gpa}}",
            &format!("{:.2}", ctx.summary.cumulative_gpa),
        );
        output = output.replace("{{total_credits}}", &ctx.summary.total_credits.to_string());
        output = output.replace("{{total_courses}}", &ctx.summary.total_courses.to_string());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace(
            "{{best_semester}}",
            &Self::escape_html(&ctx.summary.best_semester),
        );
        output = output.replace(
            "{{best_semester_gpa}}",
            &format!("{:.2}", ctx.summary.best_semester_gpa),
        );

        let chart = Self::generate_chart(&ctx.transcript.semesters);
        output = output.replace("{{gpa_chart}}", &chart);

        let semester_table = Self::generate_semester_table(ctx);
        output = output.replace("{{semester_table}}", &semester_table);

        let course_sections = Self::generate_course_sections(ctx);
        output = output.replace("{{course_sections}}", &course_sections);

        let grade_scale = Self::generate_grade_scale();
        output = output.replace("{{grade_scale}}", &grade_scale);

        output
    }

    /// Generate the CSS bar chart of GPA by semester
    fn generate_chart(records: &[SemesterRecord]) -> String {
        if records.is_empty() {
            return "<p class=\"empty\">No completed semesters yet.</p>".to_string();
        }

        let mut chart = String::new();
        chart.push_str("<div class=\"chart\">\n");

        for record in records {
            // Bar height as a percentage of the 4.0 scale, floored so even
            // a 0.0 semester remains visible.
            let height = (record.gpa / 4.0 * 100.0).max(2.0);
            let _ = writeln!(chart, "  <div class=\"bar-group\">");
            let _ = writeln!(
                chart,
                "    <div class=\"bar-value\">{:.2}</div>",
                record.gpa
            );
            let _ = writeln!(
                chart,
                "    <div class=\"bar\" style=\"height: {height:.0}%\"></div>"
            );
            let _ = writeln!(
                chart,
                "    <div class=\"bar-label\">{}</div>",
                Self::escape_html(&record.name)
            );
            let _ = writeln!(chart, "  </div>");
        }

        chart.push_str("</div>");
        chart
    }

    /// Generate the semester summary table
    fn generate_semester_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("<table>\n");
        table.push_str("<tr><th>Semester</th><th>GPA</th><th>Courses</th><th>Credits</th></tr>\n");

        for record in &ctx.transcript.semesters {
            let _ = writeln!(
                table,
                "<tr><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>",
                Self::escape_html(&record.name),
                record.gpa,
                record.course_count(),
                record.total_credits()
            );
        }

        table.push_str("</table>");
        table
    }

    /// Generate one course table per semester
    fn generate_course_sections(ctx: &ReportContext) -> String {
        let mut sections = String::new();

        for record in &ctx.transcript.semesters {
            let _ = writeln!(
                sections,
                "<h3>{} ({:.2})</h3>",
                Self::escape_html(&record.name),
                record.gpa
            );
            sections.push_str("<table>\n");
            sections
                .push_str("<tr><th>Course</th><th>Credits</th><th>Grade</th><th>Points</th></tr>\n");

            for course in &record.courses {
                let _ = writeln!(
                    sections,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
                    Self::escape_html(&course.name),
                    course.credits,
                    course.grade,
                    course.points()
                );
            }
            sections.push_str("</table>\n");
        }

        sections
    }

    /// Generate the grade scale table
    fn generate_grade_scale() -> String {
        let mut table = String::new();

        table.push_str("<table>\n");
        table.push_str("<tr><th>Grade</th><th>Points</th></tr>\n");

        for grade in GRADE_SCALE {
            let _ = writeln!(
                table,
                "<tr><td>{}</td><td>{:.1}</td></tr>",
                Self::escape_html(&grade.to_string()),
                grade.points()
            );
        }

        table.push_str("</table>");
        table
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::TranscriptSummary;
    use crate::core::transcript::parse_transcript_str;

    const SAMPLE: &str = "\
Student,Jane <Doe>
Institution,Example University
Semesters
Semester,Course,Credits,Grade
Fall 2023,Data Structures,4,A
Fall 2023,Calculus I,4,B
";

    #[test]
    fn renders_escaped_html() {
        let transcript = parse_transcript_str(SAMPLE).expect("parse transcript");
        let summary = TranscriptSummary::from_records(&transcript.semesters);
        let ctx = ReportContext::new(&transcript, &summary);

        let report = HtmlReporter::new().render(&ctx).expect("render");

        assert!(report.contains("<!DOCTYPE html>"));
        assert!(report.contains("Jane &lt;Doe&gt;"));
        assert!(!report.contains("Jane <Doe>"));
        assert!(report.contains("class=\"chart\""));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let chart = HtmlReporter::generate_chart(&[]);
        assert!(chart.contains("No completed semesters"));
    }

    #[test]
    fn bar_heights_scale_with_gpa() {
        let transcript = parse_transcript_str(SAMPLE).expect("parse transcript");
        let chart = HtmlReporter::generate_chart(&transcript.semesters);
        // (4.0 + 3.0) / 2 = 3.5 -> 88% of the 4.0 scale
        assert!(chart.contains("height: 88%"));
        assert!(chart.contains("3.50"));
    }
}
