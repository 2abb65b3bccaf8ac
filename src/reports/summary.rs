//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, IndexDiffResult};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn count_line(&self, marker: char, count: usize, noun: &str, verb: &str, color: &str) -> String {
        format!(
            "  {} {noun} {verb}",
            self.color(&format!("{marker}{count}"), color)
        )
    }

    fn advisory_detail(&self, change: &DiffResult) -> String {
        let mut parts = Vec::new();
        if !change.added_events.is_empty() {
            parts.push(self.color(&format!("+{} events", change.added_events.len()), "green"));
        }
        if !change.removed_events.is_empty() {
            parts.push(self.color(&format!("-{} events", change.removed_events.len()), "red"));
        }
        if change.aliases_changed() {
            parts.push("aliases changed".to_string());
        }
        if parts.is_empty() {
            parts.push(self.color("events reordered", "dim"));
        }
        parts.join(", ")
    }

    fn push_overflow(&self, lines: &mut Vec<String>, hidden: usize) {
        if hidden > 0 {
            let noun = plural(hidden, "package", "packages");
            lines.push(format!("  {}", self.color(&format!("... and {hidden} more {noun}"), "dim")));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &IndexDiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = result.summary();

        // Header
        lines.push(self.color(&format!("{} Summary", config.title_or_default()), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let old_path = config.metadata.old_path.as_deref().unwrap_or("old");
        let new_path = config.metadata.new_path.as_deref().unwrap_or("new");
        lines.push(format!(
            "{}  {} → {}",
            self.color("Paths:", "cyan"),
            old_path,
            new_path
        ));
        lines.push(String::new());

        lines.push(self.color("Changes:", "bold"));
        if result.is_empty() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
            return Ok(lines.join("\n"));
        }

        let counts = [
            ('+', summary.documents_added, "added", "green"),
            ('-', summary.documents_removed, "removed", "red"),
            ('~', summary.documents_modified, "modified", "yellow"),
        ];
        for (marker, count, verb, color) in counts {
            if count > 0 {
                let noun = plural(count, "document", "documents");
                lines.push(self.count_line(marker, count, noun, verb, color));
            }
        }
        let counts = [
            ('+', summary.advisories_added, "added", "green"),
            ('-', summary.advisories_removed, "removed", "red"),
            ('~', summary.advisories_modified, "modified", "yellow"),
        ];
        for (marker, count, verb, color) in counts {
            if count > 0 {
                let noun = plural(count, "advisory", "advisories");
                lines.push(self.count_line(marker, count, noun, verb, color));
            }
        }

        lines.push(String::new());
        lines.push(self.color("Packages:", "bold"));

        for document in config.limit(&result.added) {
            lines.push(format!(
                "  {} {} ({} {})",
                self.color("+", "green"),
                document.name(),
                document.advisory_count(),
                plural(document.advisory_count(), "advisory", "advisories")
            ));
        }
        self.push_overflow(&mut lines, config.overflow(result.added.len()));
        for document in config.limit(&result.removed) {
            lines.push(format!("  {} {}", self.color("-", "red"), document.name()));
        }
        self.push_overflow(&mut lines, config.overflow(result.removed.len()));
        for document in config.limit(&result.modified) {
            lines.push(format!("  {} {}", self.color("~", "yellow"), document.name));
            for advisory in &document.added {
                lines.push(format!("      {} {}", self.color("+", "green"), advisory.id));
            }
            for advisory in &document.removed {
                lines.push(format!("      {} {}", self.color("-", "red"), advisory.id));
            }
            for change in &document.modified {
                lines.push(format!(
                    "      {} {}: {}",
                    self.color("~", "yellow"),
                    change.id,
                    self.advisory_detail(change)
                ));
            }
        }
        self.push_overflow(&mut lines, config.overflow(result.modified.len()));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::{Advisory, Document, Event, EventType, Index, Timestamp};

    fn sample_result() -> IndexDiffResult {
        let detected = Event::new(Timestamp::epoch(), EventType::Detection);
        let fixed = Event::new(Timestamp::epoch().plus_days(1), EventType::Fixed);

        let old = Index::from_documents([
            Document::new("ko").with_advisory(Advisory::new("CVE-2023-1").with_event(detected.clone())),
            Document::new("zlib"),
        ]);
        let new = Index::from_documents([
            Document::new("ko").with_advisory(
                Advisory::new("CVE-2023-1")
                    .with_event(detected)
                    .with_event(fixed),
            ),
            Document::new("bash").with_advisory(Advisory::new("CVE-2023-2")),
        ]);
        DiffEngine::new().diff(&old, &new)
    }

    #[test]
    fn test_summary_lists_packages() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&sample_result(), &ReportConfig::default())
            .unwrap();

        assert!(report.contains("+1 document added"));
        assert!(report.contains("-1 document removed"));
        assert!(report.contains("~1 advisory modified"));
        assert!(report.contains("+ bash (1 advisory)"));
        assert!(report.contains("- zlib"));
        assert!(report.contains("~ CVE-2023-1: +1 events"));
        assert!(!report.contains("\x1b["));
    }

    #[test]
    fn test_summary_reports_truncated_sections() {
        let config = ReportConfig {
            max_items: Some(1),
            ..Default::default()
        };
        let old = Index::from_documents([Document::new("a"), Document::new("b")]);
        let new = Index::from_documents([
            Document::new("c"),
            Document::new("d"),
            Document::new("e"),
        ]);
        let report = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&DiffEngine::new().diff(&old, &new), &config)
            .unwrap();

        assert!(report.contains("+ c"));
        assert!(!report.contains("+ d"));
        assert!(report.contains("  ... and 2 more packages"));
        assert!(report.contains("- a"));
        assert!(!report.contains("- b"));
        assert!(report.contains("  ... and 1 more package"));
        assert!(!report.contains("1 more packages"));
    }

    #[test]
    fn test_summary_no_changes() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&IndexDiffResult::new(), &ReportConfig::default())
            .unwrap();
        assert!(report.contains("No changes"));
        assert!(!report.contains("Packages:"));
    }

    #[test]
    fn test_summary_colored() {
        let report = SummaryReporter::new()
            .generate_diff_report(&sample_result(), &ReportConfig::default())
            .unwrap();
        assert!(report.contains("\x1b[32m"));
    }
}
