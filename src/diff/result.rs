//! Diff result structures.

use crate::model::{Advisory, Document, Event};
use serde::{Deserialize, Serialize};

/// Complete result of diffing two indices.
///
/// Every collection is sorted by package name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct IndexDiffResult {
    /// Documents present only in the new index
    #[serde(default)]
    pub added: Vec<Document>,
    /// Documents present only in the old index
    #[serde(default)]
    pub removed: Vec<Document>,
    /// Documents present in both whose advisories changed
    #[serde(default)]
    pub modified: Vec<DocumentDiffResult>,
}

impl IndexDiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the two indices were identical
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.is_empty()
    }

    /// Find the modification record for a package
    #[must_use]
    pub fn find_modified(&self, name: &str) -> Option<&DocumentDiffResult> {
        self.modified.iter().find(|d| d.name == name)
    }

    /// Compute summary statistics
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary {
            documents_added: self.added.len(),
            documents_removed: self.removed.len(),
            documents_modified: self.modified.len(),
            ..DiffSummary::default()
        };

        for document in &self.modified {
            summary.advisories_added += document.added.len();
            summary.advisories_removed += document.removed.len();
            summary.advisories_modified += document.modified.len();
            for advisory in &document.modified {
                summary.events_added += advisory.added_events.len();
                summary.events_removed += advisory.removed_events.len();
            }
        }

        summary.total_changes =
            summary.documents_added + summary.documents_removed + summary.documents_modified;
        summary
    }
}

/// Changes between two versions of one package's document.
///
/// Every collection is sorted by advisory identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiffResult {
    /// Package name
    pub name: String,
    /// Advisories present only in the new document
    #[serde(default)]
    pub added: Vec<Advisory>,
    /// Advisories present only in the old document
    #[serde(default)]
    pub removed: Vec<Advisory>,
    /// Advisories present in both that differ
    #[serde(default)]
    pub modified: Vec<DiffResult>,
}

impl DocumentDiffResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}

/// Changes between two versions of one advisory.
///
/// `added` and `removed` are full snapshots of the new and old advisory.
/// Field-level changes other than events (e.g. aliases) must be read by
/// comparing the two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Advisory identifier
    pub id: String,
    /// The advisory as it appears in the new document
    pub added: Advisory,
    /// The advisory as it appears in the old document
    pub removed: Advisory,
    /// Events in the new timeline that do not occur in the old one
    #[serde(default)]
    pub added_events: Vec<Event>,
    /// Events in the old timeline that do not occur in the new one
    #[serde(default)]
    pub removed_events: Vec<Event>,
}

impl DiffResult {
    /// Whether the timelines differ in membership, not just order.
    #[must_use]
    pub fn has_event_changes(&self) -> bool {
        !self.added_events.is_empty() || !self.removed_events.is_empty()
    }

    /// Whether the alias sets differ.
    #[must_use]
    pub fn aliases_changed(&self) -> bool {
        self.added.aliases != self.removed.aliases
    }
}

/// Summary statistics for the diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub total_changes: usize,
    pub documents_added: usize,
    pub documents_removed: usize,
    pub documents_modified: usize,
    pub advisories_added: usize,
    pub advisories_removed: usize,
    pub advisories_modified: usize,
    pub events_added: usize,
    pub events_removed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventType, Timestamp};

    #[test]
    fn test_empty_result() {
        let result = IndexDiffResult::new();
        assert!(result.is_empty());
        assert!(!result.has_changes());
        assert_eq!(result.summary(), DiffSummary::default());
    }

    #[test]
    fn test_summary_counts() {
        let event = Event::new(Timestamp::epoch(), EventType::Fixed);
        let result = IndexDiffResult {
            added: vec![Document::new("bash")],
            removed: Vec::new(),
            modified: vec![DocumentDiffResult {
                name: "ko".to_string(),
                added: vec![Advisory::new("CVE-2023-1")],
                removed: Vec::new(),
                modified: vec![DiffResult {
                    id: "CVE-2023-2".to_string(),
                    added: Advisory::new("CVE-2023-2").with_event(event.clone()),
                    removed: Advisory::new("CVE-2023-2"),
                    added_events: vec![event],
                    removed_events: Vec::new(),
                }],
            }],
        };

        let summary = result.summary();
        assert_eq!(summary.documents_added, 1);
        assert_eq!(summary.documents_modified, 1);
        assert_eq!(summary.advisories_added, 1);
        assert_eq!(summary.advisories_modified, 1);
        assert_eq!(summary.events_added, 1);
        assert_eq!(summary.total_changes, 2);
        assert!(result.find_modified("ko").is_some());
        assert!(result.find_modified("bash").is_none());
    }

    #[test]
    fn test_document_diff_result_empty() {
        let result = DocumentDiffResult::new("ko");
        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_aliases_changed() {
        let diff = DiffResult {
            id: "CVE-2023-1".to_string(),
            added: Advisory::new("CVE-2023-1"),
            removed: Advisory::new("CVE-2023-1").with_alias("GHSA-2222-2222-2222"),
            ..DiffResult::default()
        };
        assert!(diff.aliases_changed());
        assert!(!diff.has_event_changes());
    }
}
