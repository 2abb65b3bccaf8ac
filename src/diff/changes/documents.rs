//! Document change computer implementation.

use super::AdvisoryChangeComputer;
use crate::diff::DocumentDiffResult;
use crate::diff::partition::partition_by_key;
use crate::diff::traits::{ChangeComputer, Equivalent};
use crate::model::Document;

/// Computes advisory-level changes between two versions of a package's document.
pub struct DocumentChangeComputer {
    advisories: AdvisoryChangeComputer,
}

impl DocumentChangeComputer {
    /// Create a new document change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            advisories: AdvisoryChangeComputer::new(),
        }
    }
}

impl Default for DocumentChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for DocumentChangeComputer {
    type Item = Document;
    type ChangeSet = DocumentDiffResult;

    fn compute(&self, old: &Document, new: &Document) -> Option<DocumentDiffResult> {
        if old.equivalent(new) {
            return None;
        }

        let partition = partition_by_key(&old.advisories, &new.advisories);
        let mut result = DocumentDiffResult::new(new.name());

        result.added = partition.added.into_iter().cloned().collect();
        result.removed = partition.removed.into_iter().cloned().collect();
        result.modified = partition
            .changed
            .into_iter()
            .filter_map(|(old_advisory, new_advisory)| {
                self.advisories.compute(old_advisory, new_advisory)
            })
            .collect();

        tracing::debug!(
            package = new.name(),
            added = result.added.len(),
            removed = result.removed.len(),
            modified = result.modified.len(),
            unchanged = partition.unchanged.len(),
            "Compared advisories"
        );

        // A schema-version-only change leaves nothing to report.
        (!result.is_empty()).then_some(result)
    }

    fn name(&self) -> &'static str {
        "DocumentChangeComputer"
    }
}
