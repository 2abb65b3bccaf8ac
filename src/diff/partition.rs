//! Keyed set partitioning and sequence membership difference.

use super::traits::{Equivalent, Keyed};
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Index a collection by key. Duplicate keys resolve to the last item.
pub fn key_map<'a, T, I>(items: I) -> BTreeMap<&'a str, &'a T>
where
    T: Keyed + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|item| (item.key(), item)).collect()
}

/// Result of partitioning two keyed collections.
///
/// Every list is sorted by key.
#[derive(Debug)]
pub struct Partition<'a, T> {
    /// Present only in the new collection
    pub added: Vec<&'a T>,
    /// Present only in the old collection
    pub removed: Vec<&'a T>,
    /// Present in both but not equivalent, as `(old, new)`
    pub changed: Vec<(&'a T, &'a T)>,
    /// Present in both and equivalent (new side)
    pub unchanged: Vec<&'a T>,
}

impl<T> Partition<'_, T> {
    /// Whether both collections held the same keys with equivalent values.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Partition two keyed collections into added / removed / changed / unchanged.
pub fn partition_by_key<'a, T, I, J>(old: I, new: J) -> Partition<'a, T>
where
    T: Keyed + Equivalent + 'a,
    I: IntoIterator<Item = &'a T>,
    J: IntoIterator<Item = &'a T>,
{
    let old_map = key_map(old);
    let new_map = key_map(new);

    let mut partition = Partition {
        added: Vec::new(),
        removed: Vec::new(),
        changed: Vec::new(),
        unchanged: Vec::new(),
    };

    for (key, old_item) in &old_map {
        match new_map.get(key) {
            Some(new_item) if old_item.equivalent(new_item) => partition.unchanged.push(*new_item),
            Some(new_item) => partition.changed.push((*old_item, *new_item)),
            None => partition.removed.push(*old_item),
        }
    }

    partition.added = new_map
        .iter()
        .filter(|(key, _)| !old_map.contains_key(*key))
        .map(|(_, item)| *item)
        .collect();

    partition
}

/// Items of `from` that do not occur anywhere in `against`.
///
/// Membership only: position and multiplicity are ignored, and the result
/// keeps the order of `from`.
pub fn membership_difference<T>(from: &[T], against: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let present: HashSet<&T> = against.iter().collect();
    from.iter()
        .filter(|item| !present.contains(item))
        .cloned()
        .collect()
}
