//! Markdown report generator
//!
//! Generates GPA reports in Markdown format with an embedded Mermaid chart
//! for the semester history. These reports render well in GitHub, GitLab,
//! and VS Code.

use crate::core::models::GRADE_SCALE;
use crate::core::report::visualization::MermaidChart;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Substitute header metadata
        output = output.replace("{{student}}", ctx.student());
        output = output.replace("{{institution}}", ctx.institution());

        // Substitute summary values
        output = output.replace(
            "{{cumulative_gpa}}",
            &format!("{:.2}", ctx.summary.cumulative_gpa),
        );
        output = output.replace("{{total_credits}}", &ctx.summary.total_credits.to_string());
        output = output.replace("{{total_courses}}", &ctx.summary.total_courses.to_string());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace("{{best_semester}}", &ctx.summary.best_semester);
        output = output.replace(
            "{{best_semester_gpa}}",
            &format!("{:.2}", ctx.summary.best_semester_gpa),
        );

        // Generate semester table
        let semester_table = Self::generate_semester_table(ctx);
        output = output.replace("{{semester_table}}", &semester_table);

        // Generate per-semester course sections
        let course_sections = Self::generate_course_sections(ctx);
        output = output.replace("{{course_sections}}", &course_sections);

        // Generate grade scale table
        let grade_scale = Self::generate_grade_scale();
        output = output.replace("{{grade_scale}}", &grade_scale);

        // Generate Mermaid chart
        let chart = MermaidChart::generate_gpa_chart(&ctx.transcript.semesters);
        output = output.replace("{{gpa_chart}}", &chart);

        output
    }

    /// Generate the semester summary table
    fn generate_semester_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Semester | GPA | Courses | Credits |\n");
        table.push_str("|---|---|---|---|\n");

        for record in &ctx.transcript.semesters {
            let _ = writeln!(
                table,
                "| {} | {:.2} | {} | {} |",
                record.name,
                record.gpa,
                record.course_count(),
                record.total_credits()
            );
        }

        table
    }

    /// Generate one course table per semester
    fn generate_course_sections(ctx: &ReportContext) -> String {
        let mut sections = String::new();

        for record in &ctx.transcript.semesters {
            let _ = writeln!(sections, "### {} ({:.2})\n", record.name, record.gpa);
            sections.push_str("| Course | Credits | Grade | Points |\n");
            sections.push_str("|---|---|---|---|\n");

            for course in &record.courses {
                let _ = writeln!(
                    sections,
                    "| {} | {} | {} | {:.1} |",
                    course.name,
                    course.credits,
                    course.grade,
                    course.points()
                );
            }
            sections.push('\n');
        }

        sections
    }

    /// Generate the grade scale table
    fn generate_grade_scale() -> String {
        let mut table = String::new();

        table.push_str("| Grade | Points |\n");
        table.push_str("|---|---|\n");

        for grade in GRADE_SCALE {
            let _ = writeln!(table, "| {} | {:.1} |", grade, grade.points());
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
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
Student,Jane Doe
Institution,Example University
Semesters
Semester,Course,Credits,Grade
Fall 2023,Data Structures,4,A
Spring 2024,Algorithms,4,B+
";

    #[test]
    fn renders_all_sections() {
        let transcript = parse_transcript_str(SAMPLE).expect("parse transcript");
        let summary = TranscriptSummary::from_records(&transcript.semesters);
        let ctx = ReportContext::new(&transcript, &summary);

        let report = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(report.contains("# GPA Report: Jane Doe"));
        assert!(report.contains("Example University"));
        assert!(report.contains("xychart-beta"));
        assert!(report.contains("| Fall 2023 | 4.00 | 1 | 4 |"));
        assert!(report.contains("### Spring 2024 (3.30)"));
        assert!(report.contains("| A+ | 4.0 |"));
        assert!(!report.contains("{{"));
    }
}
