//! Report command handler
//!
//! Generates GPA reports in various formats (Markdown, HTML) with summary
//! statistics, a GPA history chart, and per-semester course tables.

use gpa_track::config::Config;
use gpa_track::core::{
    export::TranscriptSummary,
    report::{HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator},
    transcript::{parse_transcript_csv, Transcript},
};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to transcript CSV file
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing default reports directory
pub fn run(input_file: &Path, output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(input_file, output_file, format_str, config) {
        error!(
            "Report generation failed for {}: {err}",
            input_file.display()
        );
        eprintln!("{err}");
    }
}

/// Prepared report data ready for rendering
struct ReportData {
    transcript: Transcript,
    summary: TranscriptSummary,
}

/// Load and prepare all data needed for report generation
fn prepare_report_data(input_file: &Path) -> Result<ReportData, String> {
    let transcript = parse_transcript_csv(input_file).map_err(|e| {
        error!("Failed to load transcript {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!("Transcript loaded: {}", input_file.display());

    let summary = TranscriptSummary::from_records(&transcript.semesters);

    Ok(ReportData {
        transcript,
        summary,
    })
}

/// Write the report to a file in the specified format
fn write_report(data: &ReportData, format: ReportFormat, output_path: &Path) -> Result<(), String> {
    let ctx = ReportContext::new(&data.transcript, &data.summary);

    match format {
        ReportFormat::Markdown => {
            let reporter = MarkdownReporter::new();
            reporter
                .generate(&ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?;
        }
        ReportFormat::Html => {
            let reporter = HtmlReporter::new();
            reporter
                .generate(&ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?;
        }
    }

    Ok(())
}

/// Print a summary of the report
fn print_summary(data: &ReportData) {
    println!("\n=== Summary ===");
    println!("Student: {}", data.transcript.student);
    println!("Institution: {}", data.transcript.institution);
    println!("Cumulative GPA: {:.2}", data.summary.cumulative_gpa);
    println!("Total Credits: {}", data.summary.total_credits);
    println!("Total Courses: {}", data.summary.total_courses);
    println!("Semesters Completed: {}", data.summary.semesters_completed);

    if !data.summary.best_semester.is_empty() {
        println!(
            "Best Semester: {} ({:.2})",
            data.summary.best_semester, data.summary.best_semester_gpa
        );
    }
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    // Prepare report data
    let data = prepare_report_data(input_file)?;

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let filename = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("transcript")
            .to_string();
        let output_filename = format!("{filename}_report.{}", format.extension());
        reports_dir.join(output_filename)
    };

    // Write the report
    write_report(&data, format, &final_output_path)?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    print_summary(&data);

    Ok(())
}

/// Generate a report as part of the calc command
///
/// This is called when `--report` is passed to the calc command.
pub fn generate_from_calc(
    input_file: &Path,
    output_dir: &Path,
    format_str: &str,
) -> Result<PathBuf, String> {
    // Parse the format
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    // Prepare report data
    let data = prepare_report_data(input_file)?;

    // Build output path
    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript")
        .to_string();
    let output_filename = format!("{filename}_report.{}", format.extension());
    let output_path = output_dir.join(output_filename);

    // Write the report
    write_report(&data, format, &output_path)?;

    Ok(output_path)
}
