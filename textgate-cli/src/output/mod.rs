//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Outcome of checking one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the checked file
    pub path: String,
    /// Whether any section matched
    pub matched: bool,
    /// Index of the matching section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_section: Option<usize>,
    /// Number of sections handed to the condition
    pub sections_tested: usize,
    /// File size in bytes
    pub bytes: u64,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per file
    #[default]
    Text,
    /// JSON array of file reports
    Json,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single file report
    fn format_report(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}
