//! Report generation module for transcripts
//!
//! This module provides functionality to generate GPA reports in various
//! formats (Markdown, HTML) with a per-semester GPA chart and course tables.

pub mod formats;
pub mod visualization;

use crate::core::export::TranscriptSummary;
use crate::core::transcript::Transcript;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::MermaidChart;

/// Data context for report generation
///
/// Aggregates everything needed to render a GPA report, providing a single
/// source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Parsed transcript with completed semesters
    pub transcript: &'a Transcript,
    /// Summary statistics
    pub summary: &'a TranscriptSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(transcript: &'a Transcript, summary: &'a TranscriptSummary) -> Self {
        Self {
            transcript,
            summary,
        }
    }

    /// Get the student name
    #[must_use]
    pub fn student(&self) -> &str {
        &self.transcript.student
    }

    /// Get the institution name
    #[must_use]
    pub fn institution(&self) -> &str {
        &self.transcript.institution
    }

    /// Number of completed semesters
    #[must_use]
    pub const fn semester_count(&self) -> usize {
        self.transcript.semesters.len()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
