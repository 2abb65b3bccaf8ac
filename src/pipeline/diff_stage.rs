//! Diff computation stage.

use crate::diff::{DiffEngine, IndexDiffResult};
use crate::model::Index;

/// Run the diff between two loaded indices and log a summary.
#[must_use]
pub fn compute_diff(old: &Index, new: &Index, quiet: bool) -> IndexDiffResult {
    if !quiet {
        tracing::info!("Computing advisory diff...");
    }

    let result = DiffEngine::new().diff(old, new);

    if !quiet {
        let summary = result.summary();
        tracing::info!(
            "Diff complete: {} documents added, {} removed, {} modified ({} advisories added, {} removed, {} modified)",
            summary.documents_added,
            summary.documents_removed,
            summary.documents_modified,
            summary.advisories_added,
            summary.advisories_removed,
            summary.advisories_modified
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn test_compute_diff() {
        let old = Index::from_documents([Document::new("ko")]);
        let new = Index::from_documents([Document::new("ko"), Document::new("bash")]);
        let result = compute_diff(&old, &new, true);
        assert_eq!(result.added.len(), 1);
        assert!(compute_diff(&new, &new, true).is_empty());
    }
}
