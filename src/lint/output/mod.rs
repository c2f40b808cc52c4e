//! Lint output formatters.
//!
//! This module provides formatters for outputting validation diagnostics
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::LintDiagnostic;
use std::io::Write;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format diagnostics to the given writer.
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
