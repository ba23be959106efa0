//! CLI command handlers for `gpatrack`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod report;
pub mod session;
