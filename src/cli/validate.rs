//! Validate command handler.
//!
//! Implements the `validate` subcommand: load every advisory document in a
//! directory, enforcing the loader's invariants, and report what was found.

use crate::config::ValidateConfig;
use crate::parsers::LoadedIndex;
use crate::pipeline::{OutputTarget, exit_codes, load_index_with_context, write_output};
use crate::reports::ReportFormat;
use crate::reports::escape::escape_markdown_table;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

/// Per-document line of the validation report.
#[derive(Debug, Serialize)]
struct DocumentReport<'a> {
    package: &'a str,
    file: String,
    schema_version: &'a str,
    advisories: usize,
    resolved: usize,
    nolint: &'a [String],
}

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    path: String,
    documents: Vec<DocumentReport<'a>>,
    skipped_files: usize,
}

/// Run the validate command, returning the desired exit code.
///
/// Any invalid document fails the load, which the caller reports as an error.
#[allow(clippy::needless_pass_by_value)]
pub fn run_validate(config: ValidateConfig) -> Result<i32> {
    let loaded = load_index_with_context(&config.path, &config.loader, true)?;
    let report = build_report(&config, &loaded);

    let content = match config.output.format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        }
        ReportFormat::Markdown => render_markdown(&report)?,
        ReportFormat::Summary => render_summary(&report)?,
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&content, &target, false)?;
    Ok(exit_codes::SUCCESS)
}

fn build_report<'a>(config: &ValidateConfig, loaded: &'a LoadedIndex) -> ValidationReport<'a> {
    let documents = loaded
        .index
        .documents()
        .map(|doc| {
            let source = loaded.source(doc.name());
            DocumentReport {
                package: doc.name(),
                file: source
                    .map(|s| s.filename.display().to_string())
                    .unwrap_or_default(),
                schema_version: &doc.schema_version,
                advisories: doc.advisory_count(),
                resolved: doc.advisories.iter().filter(|a| a.is_resolved()).count(),
                nolint: source.map(|s| s.nolint.as_slice()).unwrap_or_default(),
            }
        })
        .collect();

    ValidationReport {
        path: config.path.display().to_string(),
        documents,
        skipped_files: loaded.skipped,
    }
}

fn render_summary(report: &ValidationReport<'_>) -> Result<String> {
    let mut out = String::new();
    let advisories: usize = report.documents.iter().map(|d| d.advisories).sum();
    writeln!(
        out,
        "{}: {} documents, {} advisories, all valid",
        report.path,
        report.documents.len(),
        advisories
    )?;
    for doc in &report.documents {
        write!(
            out,
            "  {} ({} advisories, {} resolved)",
            doc.package, doc.advisories, doc.resolved
        )?;
        if !doc.nolint.is_empty() {
            write!(out, " nolint: {}", doc.nolint.join(","))?;
        }
        writeln!(out)?;
    }
    if report.skipped_files > 0 {
        writeln!(out, "Skipped {} non-advisory YAML files", report.skipped_files)?;
    }
    Ok(out.trim_end().to_string())
}

fn render_markdown(report: &ValidationReport<'_>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Advisory validation")?;
    writeln!(out)?;
    writeln!(out, "| Package | File | Advisories | Resolved | nolint |")?;
    writeln!(out, "|---|---|---|---|---|")?;
    for doc in &report.documents {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            escape_markdown_table(doc.package),
            escape_markdown_table(&doc.file),
            doc.advisories,
            doc.resolved,
            escape_markdown_table(&doc.nolint.join(", "))
        )?;
    }
    Ok(out)
}
