//! Markdown report generator.
//!
//! Produces a report suitable for pull request comments: a summary table
//! followed by one section per changed package.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DocumentDiffResult, IndexDiffResult};
use crate::model::Event;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include an event table for each modified advisory
    event_tables: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { event_tables: true }
    }

    /// Omit per-advisory event tables.
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.event_tables = false;
        self
    }

    fn write_document(
        &self,
        out: &mut String,
        document: &DocumentDiffResult,
        config: &ReportConfig,
    ) -> Result<(), ReportError> {
        writeln!(out, "### `{}`", document.name.replace('`', ""))?;
        writeln!(out)?;
        for advisory in &document.added {
            writeln!(out, "- Added {}", escape_markdown_inline(&advisory.id))?;
        }
        for advisory in &document.removed {
            writeln!(out, "- Removed {}", escape_markdown_inline(&advisory.id))?;
        }
        for change in &document.modified {
            writeln!(
                out,
                "- Modified {} ({} added, {} removed events)",
                escape_markdown_inline(&change.id),
                change.added_events.len(),
                change.removed_events.len()
            )?;
        }
        writeln!(out)?;

        if self.event_tables && config.include_snapshots {
            for change in document.modified.iter().filter(|c| c.has_event_changes()) {
                write_event_table(out, change)?;
            }
        }
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_event_table(out: &mut String, change: &DiffResult) -> Result<(), ReportError> {
    writeln!(out, "<details><summary>{}</summary>", escape_markdown_inline(&change.id))?;
    writeln!(out)?;
    writeln!(out, "| | Timestamp | Type | Note |")?;
    writeln!(out, "|---|---|---|---|")?;
    for event in &change.added_events {
        write_event_row(out, "+", event)?;
    }
    for event in &change.removed_events {
        write_event_row(out, "-", event)?;
    }
    writeln!(out)?;
    writeln!(out, "</details>")?;
    writeln!(out)?;
    Ok(())
}

fn write_event_row(out: &mut String, marker: &str, event: &Event) -> Result<(), ReportError> {
    let note = event
        .data
        .as_ref()
        .and_then(|d| d.note.as_deref().or(d.fixed_version.as_deref()))
        .unwrap_or("");
    writeln!(
        out,
        "| {marker} | {} | {} | {} |",
        event.timestamp,
        event.event_type,
        escape_markdown_table(note)
    )?;
    Ok(())
}

/// Note how many entries of a section were cut by `max_items`.
fn write_overflow(out: &mut String, hidden: usize) -> Result<(), ReportError> {
    if hidden > 0 {
        let noun = if hidden == 1 { "package" } else { "packages" };
        writeln!(out)?;
        writeln!(out, "_... and {hidden} more {noun}_")?;
    }
    Ok(())
}

impl ReportGenerator for MarkdownReporter {
    fn generate_diff_report(
        &self,
        result: &IndexDiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let summary = result.summary();

        writeln!(out, "# {}", escape_markdown_inline(config.title_or_default()))?;
        writeln!(out)?;
        if let (Some(old), Some(new)) = (&config.metadata.old_path, &config.metadata.new_path) {
            writeln!(out, "Comparing `{old}` to `{new}`.")?;
            writeln!(out)?;
        }

        if result.is_empty() {
            writeln!(out, "No changes.")?;
            return Ok(out);
        }

        writeln!(out, "## Summary")?;
        writeln!(out)?;
        writeln!(out, "| | Added | Removed | Modified |")?;
        writeln!(out, "|---|---|---|---|")?;
        writeln!(
            out,
            "| Packages | {} | {} | {} |",
            summary.documents_added, summary.documents_removed, summary.documents_modified
        )?;
        writeln!(
            out,
            "| Advisories | {} | {} | {} |",
            summary.advisories_added, summary.advisories_removed, summary.advisories_modified
        )?;
        writeln!(
            out,
            "| Events | {} | {} | - |",
            summary.events_added, summary.events_removed
        )?;
        writeln!(out)?;

        if !result.added.is_empty() {
            writeln!(out, "## Added packages")?;
            writeln!(out)?;
            for document in config.limit(&result.added) {
                writeln!(
                    out,
                    "- `{}` ({} advisories)",
                    document.name().replace('`', ""),
                    document.advisory_count()
                )?;
            }
            write_overflow(&mut out, config.overflow(result.added.len()))?;
            writeln!(out)?;
        }

        if !result.removed.is_empty() {
            writeln!(out, "## Removed packages")?;
            writeln!(out)?;
            for document in config.limit(&result.removed) {
                writeln!(out, "- `{}`", document.name().replace('`', ""))?;
            }
            write_overflow(&mut out, config.overflow(result.removed.len()))?;
            writeln!(out)?;
        }

        if !result.modified.is_empty() {
            writeln!(out, "## Modified packages")?;
            writeln!(out)?;
            for document in config.limit(&result.modified) {
                self.write_document(&mut out, document, config)?;
            }
            write_overflow(&mut out, config.overflow(result.modified.len()))?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::{Advisory, Document, EventData, EventType, Index, Timestamp};
    use crate::reports::ReportMetadata;

    fn sample_result() -> IndexDiffResult {
        let detected = Event::new(Timestamp::epoch(), EventType::Detection);
        let fixed = Event::new(Timestamp::epoch().plus_days(1), EventType::Fixed).with_data(
            EventData {
                fixed_version: Some("1.2.3-r0".into()),
                ..Default::default()
            },
        );
        let old = Index::from_documents([
            Document::new("ko").with_advisory(Advisory::new("CVE-2023-1").with_event(detected.clone())),
        ]);
        let new = Index::from_documents([
            Document::new("ko").with_advisory(
                Advisory::new("CVE-2023-1")
                    .with_event(detected)
                    .with_event(fixed),
            ),
            Document::new("bash"),
        ]);
        DiffEngine::new().diff(&old, &new)
    }

    #[test]
    fn test_markdown_sections() {
        let config = ReportConfig {
            metadata: ReportMetadata::new(Some("old".into()), Some("new".into())),
            ..Default::default()
        };
        let md = MarkdownReporter::new()
            .generate_diff_report(&sample_result(), &config)
            .unwrap();

        assert!(md.starts_with("# Advisory Diff"));
        assert!(md.contains("Comparing `old` to `new`."));
        assert!(md.contains("| Packages | 1 | 0 | 1 |"));
        assert!(md.contains("## Added packages"));
        assert!(md.contains("- `bash` (0 advisories)"));
        assert!(md.contains("### `ko`"));
        assert!(md.contains("- Modified CVE-2023-1 (1 added, 0 removed events)"));
        assert!(md.contains("| + | 1970-01-02T00:00:00+00:00 | fixed | 1.2.3-r0 |"));
    }

    #[test]
    fn test_markdown_compact_omits_event_tables() {
        let md = MarkdownReporter::new()
            .compact()
            .generate_diff_report(&sample_result(), &ReportConfig::default())
            .unwrap();
        assert!(!md.contains("<details>"));
    }

    #[test]
    fn test_markdown_reports_truncated_sections() {
        let config = ReportConfig {
            max_items: Some(1),
            ..Default::default()
        };
        let old = Index::from_documents([Document::new("a")]);
        let new = Index::from_documents([Document::new("b"), Document::new("c")]);
        let md = MarkdownReporter::new()
            .generate_diff_report(&DiffEngine::new().diff(&old, &new), &config)
            .unwrap();

        assert!(md.contains("- `b` (0 advisories)"));
        assert!(!md.contains("- `c`"));
        assert!(md.contains("_... and 1 more package_"));
        assert!(md.contains("- `a`"));
        assert_eq!(md.matches("more package").count(), 1);
    }

    #[test]
    fn test_markdown_no_changes() {
        let md = MarkdownReporter::new()
            .generate_diff_report(&IndexDiffResult::new(), &ReportConfig::default())
            .unwrap();
        assert!(md.contains("No changes."));
        assert!(!md.contains("## Summary"));
    }
}
