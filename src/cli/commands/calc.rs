//! Calc command handler

use gpa_track::config::Config;
use gpa_track::core::{export, transcript::parse_transcript_csv};
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Run the calc command for one or more input files.
///
/// # Arguments
/// * `input_files` - Paths to transcript CSV files
/// * `output_files` - Optional output paths; must match inputs 1:1 when provided
/// * `config` - Configuration containing default export directory
/// * `verbose` - Whether to show a detailed summary block
pub fn run(input_files: &[PathBuf], output_files: &[PathBuf], config: &Config, verbose: bool) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = export_single(input_file, output_file, config, verbose) {
            error!("Calc failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

fn export_single(
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let transcript = parse_transcript_csv(input_file).map_err(|e| {
        error!("Failed to load transcript {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    if verbose {
        println!(
            "✓ Transcript loaded successfully from: {}",
            input_file.display()
        );
    } else {
        info!("Transcript loaded: {}", input_file.display());
    }

    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let exports_dir = PathBuf::from(&config.paths.exports_dir);
        std::fs::create_dir_all(&exports_dir).map_err(|e| {
            format!(
                "✗ Failed to create exports directory {}: {e}",
                exports_dir.display()
            )
        })?;

        let filename = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("transcript")
            .to_string();
        let output_filename = format!("{filename}_summary.csv");
        exports_dir.join(output_filename)
    };

    match export::export_summary_csv(&transcript, &final_output_path) {
        Ok(summary) => {
            println!("✓ Summary exported to: {}", final_output_path.display());
            info!(
                "Exported transcript summary to: {}",
                final_output_path.display()
            );

            if verbose {
                println!(
                    "\n=== Transcript Summary for {} at {} ===",
                    transcript.student, transcript.institution
                );
                println!("Cumulative GPA: {:.2}", summary.cumulative_gpa);
                println!("Total Credits: {}", summary.total_credits);
                println!("Total Courses: {}", summary.total_courses);
                println!("Semesters Completed: {}", summary.semesters_completed);
                println!(
                    "Best Semester: {} ({:.2})",
                    summary.best_semester, summary.best_semester_gpa
                );
            }
            Ok(())
        }
        Err(e) => Err(format!(
            "✗ Failed to export summary to {}: {e}",
            final_output_path.display()
        )),
    }
}
