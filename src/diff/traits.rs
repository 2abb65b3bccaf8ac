//! Trait definitions shared by the diff layers.
//!
//! Every layer is expressed through the same three capabilities:
//! - [`Keyed`]: the join key used to match entities across two snapshots
//! - [`Equivalent`]: deep structural equality under that layer's policy
//! - [`ChangeComputer`]: produce a change record for a matched pair

use super::partition::key_map;
use crate::model::{Advisory, Document, Index};

/// An entity matched across snapshots by a string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Advisory {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Document {
    fn key(&self) -> &str {
        self.name()
    }
}

/// Deep structural equality used to decide whether a matched pair changed.
///
/// Implementations differ from `PartialEq` where a layer treats a nested
/// collection as keyed rather than ordered.
pub trait Equivalent {
    fn equivalent(&self, other: &Self) -> bool;
}

/// Aliases compare as a set and events as an ordered sequence, which is
/// exactly the derived equality.
impl Equivalent for Advisory {
    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

/// Advisories compare as a set keyed by identifier; their order in the
/// document is irrelevant.
impl Equivalent for Document {
    fn equivalent(&self, other: &Self) -> bool {
        self.schema_version == other.schema_version
            && self.package == other.package
            && key_map(&self.advisories) == key_map(&other.advisories)
    }
}

impl Equivalent for Index {
    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.documents().zip(other.documents()).all(|(old, new)| {
                old.key() == new.key() && old.equivalent(new)
            })
    }
}

/// Trait for computing the change record of one matched pair.
///
/// Returns `None` when the pair is unchanged or the change record would be
/// empty.
pub trait ChangeComputer: Send + Sync {
    /// The entity type compared by this computer.
    type Item;

    /// The change record this computer produces.
    type ChangeSet;

    /// Compare an old and new value that share a join key.
    fn compute(&self, old: &Self::Item, new: &Self::Item) -> Option<Self::ChangeSet>;

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &str;
}
