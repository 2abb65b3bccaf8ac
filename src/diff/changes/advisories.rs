//! Advisory change computer implementation.

use crate::diff::DiffResult;
use crate::diff::partition::membership_difference;
use crate::diff::traits::{ChangeComputer, Equivalent};
use crate::model::Advisory;

/// Computes the change record for a pair of advisories sharing an identifier.
pub struct AdvisoryChangeComputer;

impl AdvisoryChangeComputer {
    /// Create a new advisory change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for AdvisoryChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for AdvisoryChangeComputer {
    type Item = Advisory;
    type ChangeSet = DiffResult;

    fn compute(&self, old: &Advisory, new: &Advisory) -> Option<DiffResult> {
        // Ordered comparison: a reordered timeline is a change even though
        // the membership difference below comes out empty.
        if old.equivalent(new) {
            return None;
        }

        Some(DiffResult {
            id: new.id.clone(),
            added: new.clone(),
            removed: old.clone(),
            added_events: membership_difference(&new.events, &old.events),
            removed_events: membership_difference(&old.events, &new.events),
        })
    }

    fn name(&self) -> &'static str {
        "AdvisoryChangeComputer"
    }
}
