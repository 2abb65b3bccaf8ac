//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brief terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Include the before/after advisory snapshots of modified advisories
    pub include_snapshots: bool,
    /// Maximum items listed per section (None for all)
    pub max_items: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            include_snapshots: true,
            max_items: None,
            metadata: ReportMetadata::default(),
        }
    }
}

impl ReportConfig {
    /// Title to print, falling back to the default heading.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Advisory Diff")
    }

    /// Clamp a section to `max_items`.
    pub(crate) fn limit<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.max_items {
            Some(max) if max < items.len() => &items[..max],
            _ => items,
        }
    }

    /// Number of items [`limit`](Self::limit) leaves out of a section of `total`.
    pub(crate) fn overflow(&self, total: usize) -> usize {
        self.max_items.map_or(0, |max| total.saturating_sub(max))
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Old advisory directory
    pub old_path: Option<String>,
    /// New advisory directory
    pub new_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(old_path: Option<String>, new_path: Option<String>) -> Self {
        Self {
            old_path,
            new_path,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
