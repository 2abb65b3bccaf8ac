//! Index diff engine implementation.

use super::changes::DocumentChangeComputer;
use super::partition::partition_by_key;
use super::traits::{ChangeComputer, Equivalent};
use super::IndexDiffResult;
use crate::model::Index;

/// Structural diff engine for advisory indices.
///
/// The engine holds no state between calls and never fails; diffing an index
/// against itself yields an empty result.
pub struct DiffEngine {
    documents: DocumentChangeComputer,
}

impl DiffEngine {
    /// Create a new diff engine
    #[must_use]
    pub const fn new() -> Self {
        Self {
            documents: DocumentChangeComputer::new(),
        }
    }

    /// Compare two indices and return the diff result
    pub fn diff(&self, old: &Index, new: &Index) -> IndexDiffResult {
        let mut result = IndexDiffResult::new();

        // Quick check: identical snapshots need no partitioning
        if old.equivalent(new) {
            tracing::debug!(documents = old.len(), "Indices are identical");
            return result;
        }

        let partition = partition_by_key(old.documents(), new.documents());

        result.added = partition.added.into_iter().cloned().collect();
        result.removed = partition.removed.into_iter().cloned().collect();
        result.modified = partition
            .changed
            .into_iter()
            .filter_map(|(old_doc, new_doc)| self.documents.compute(old_doc, new_doc))
            .collect();

        tracing::debug!(
            added = result.added.len(),
            removed = result.removed.len(),
            modified = result.modified.len(),
            unchanged = partition.unchanged.len(),
            "Compared documents"
        );

        result
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Diff two indices with a default engine.
pub fn index_diff(old: &Index, new: &Index) -> IndexDiffResult {
    DiffEngine::new().diff(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Advisory, Document, Event, EventType, Timestamp};

    fn ko(advisories: Vec<Advisory>) -> Document {
        advisories
            .into_iter()
            .fold(Document::new("ko"), Document::with_advisory)
    }

    fn tp(id: &str) -> Advisory {
        Advisory::new(id).with_event(Event::new(
            Timestamp::epoch(),
            EventType::TruePositiveDetermination,
        ))
    }

    #[test]
    fn test_empty_diff() {
        let engine = DiffEngine::new();
        let index = Index::default();
        assert!(engine.diff(&index, &index).is_empty());
    }

    #[test]
    fn test_added_and_removed_documents() {
        let old = Index::from_documents([Document::new("bash"), ko(vec![tp("CVE-2023-1")])]);
        let new = Index::from_documents([ko(vec![tp("CVE-2023-1")]), Document::new("zlib")]);

        let result = index_diff(&old, &new);
        assert_eq!(result.added, vec![Document::new("zlib")]);
        assert_eq!(result.removed, vec![Document::new("bash")]);
        assert!(result.modified.is_empty());
    }

    #[test]
    fn test_modified_documents_sorted_by_name() {
        let old = Index::from_documents([
            Document::new("zlib"),
            Document::new("bash"),
            Document::new("ko"),
        ]);
        let new = Index::from_documents([
            Document::new("zlib").with_advisory(tp("CVE-2023-3")),
            Document::new("bash").with_advisory(tp("CVE-2023-1")),
            Document::new("ko"),
        ]);

        let result = index_diff(&old, &new);
        let names: Vec<_> = result.modified.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["bash", "zlib"]);
    }

    #[test]
    fn test_schema_version_only_change_yields_empty_result() {
        let old = Index::from_documents([ko(vec![tp("CVE-2023-1")])]);
        let new = Index::from_documents([ko(vec![tp("CVE-2023-1")]).with_schema_version("2.0.2")]);
        assert!(index_diff(&old, &new).is_empty());
    }
}
