//! Report generation for diff results.
//!
//! This module provides multiple output formats for advisory diff results:
//! - Summary: Compact shell-friendly output
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation, e.g. for pull request comments
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Package names, advisory IDs and notes come from user-edited files and
//! are escaped before embedding in Markdown reports.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::IndexDiffResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &IndexDiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &IndexDiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format.
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator, controlling ANSI color for terminal formats.
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_diff_report() {
        let reporter = create_reporter_with_options(ReportFormat::Summary, false);
        let mut out = Vec::new();
        reporter
            .write_diff_report(&IndexDiffResult::new(), &ReportConfig::default(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No changes"));
    }
}
