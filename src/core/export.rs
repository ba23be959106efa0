//! Export transcript summaries to CSV

use crate::core::models::SemesterRecord;
use crate::core::transcript::Transcript;
use std::error::Error;
use std::path::Path;

/// Trait for exporting transcript summaries in different formats
pub trait SummaryExporter {
    /// Export a summary of the given transcript
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(&self, transcript: &Transcript, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

/// Summary statistics for a transcript
#[derive(Debug, Clone)]
pub struct TranscriptSummary {
    /// Cumulative GPA over all courses
    pub cumulative_gpa: f64,
    /// Total credit hours
    pub total_credits: u32,
    /// Total number of courses
    pub total_courses: usize,
    /// Number of completed semesters
    pub semesters_completed: usize,
    /// Name of the semester with the highest frozen GPA
    pub best_semester: String,
    /// GPA of the best semester
    pub best_semester_gpa: f64,
}

impl TranscriptSummary {
    /// Compute summary statistics from completed semester records
    #[must_use]
    pub fn from_records(records: &[SemesterRecord]) -> Self {
        let mut best_semester = String::new();
        let mut best_semester_gpa = 0.0;

        for record in records {
            if record.gpa > best_semester_gpa || best_semester.is_empty() {
                best_semester_gpa = record.gpa;
                best_semester.clone_from(&record.name);
            }
        }

        Self {
            cumulative_gpa: crate::core::gpa::cumulative_gpa(records, &[]),
            total_credits: records.iter().map(SemesterRecord::total_credits).sum(),
            total_courses: records.iter().map(SemesterRecord::course_count).sum(),
            semesters_completed: records.len(),
            best_semester,
            best_semester_gpa,
        }
    }
}

/// CSV exporter for transcript summaries
pub struct CsvExporter;

impl SummaryExporter for CsvExporter {
    fn export(&self, transcript: &Transcript, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let summary = TranscriptSummary::from_records(&transcript.semesters);
        export_summary_csv_with_summary(transcript, &summary, output_path)
    }
}

/// Export a transcript summary to CSV format
///
/// The file starts with one summary item per row, then a `Semesters`
/// section (name, frozen GPA, course count, credits), then a `Courses`
/// section with every graded course and its derived points.
///
/// # Arguments
/// * `transcript` - The parsed transcript
/// * `summary` - Precomputed summary statistics
/// * `output_path` - Path to write the CSV file to
///
/// # Errors
/// Returns an error if file writing fails
pub fn export_summary_csv_with_summary(
    transcript: &Transcript,
    summary: &TranscriptSummary,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    use std::fs::File;
    use std::io::Write;

    let mut file = File::create(output_path)?;

    writeln!(file, "Student,{}", transcript.student)?;
    writeln!(file, "Institution,{}", transcript.institution)?;
    writeln!(file, "Cumulative GPA,{:.2}", summary.cumulative_gpa)?;
    writeln!(file, "Total Credits,{}", summary.total_credits)?;
    writeln!(file, "Total Courses,{}", summary.total_courses)?;
    writeln!(file, "Semesters Completed,{}", summary.semesters_completed)?;
    writeln!(
        file,
        "Best Semester,\"{}\",{:.2}",
        summary.best_semester, summary.best_semester_gpa
    )?;

    writeln!(file, "Semesters")?;
    writeln!(file, "Semester,GPA,Courses,Credits")?;
    for record in &transcript.semesters {
        writeln!(
            file,
            "\"{}\",{:.2},{},{}",
            record.name,
            record.gpa,
            record.course_count(),
            record.total_credits()
        )?;
    }

    writeln!(file, "Courses")?;
    writeln!(file, "Semester,Course,Credits,Grade,Points")?;

    logger::debug!(
        "Exporting {} courses from transcript",
        transcript.course_count()
    );

    for record in &transcript.semesters {
        for course in &record.courses {
            writeln!(
                file,
                "\"{}\",\"{}\",{},{},{:.1}",
                record.name,
                course.name,
                course.credits,
                course.grade,
                course.points()
            )?;
        }
    }

    Ok(())
}

/// Convenience function to export a summary using the default CSV exporter
///
/// Returns the computed summary statistics for further use
///
/// # Errors
/// Returns an error if file writing fails
pub fn export_summary_csv<P: AsRef<Path>>(
    transcript: &Transcript,
    output_path: P,
) -> Result<TranscriptSummary, Box<dyn Error>> {
    let summary = TranscriptSummary::from_records(&transcript.semesters);
    export_summary_csv_with_summary(transcript, &summary, output_path.as_ref())?;
    Ok(summary)
}
