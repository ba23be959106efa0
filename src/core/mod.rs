//! Core module for GPA computation and semester tracking

pub mod export;
pub mod gpa;
pub mod models;
pub mod report;
pub mod tracker;
pub mod transcript;

/// Returns the current version of the `gpa-track` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
