//! Shared library for `gpa-track`
//! Contains GPA computation, semester tracking, transcript parsing,
//! and report generation used by the CLI.

pub mod config;
pub mod core;
