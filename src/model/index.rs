//! Collections of advisory documents keyed by package name.
//!
//! An [`Index`] holds at most one [`Document`] per package name. Use
//! [`IndexBuilder`] when duplicate names must be rejected (loaders), or
//! [`Index::from_documents`] when the last document for a name should win.
//!
//! ```ignore
//! use advisory_diff::model::{Document, IndexBuilder};
//!
//! let mut builder = IndexBuilder::new();
//! builder.try_add(Document::new("ko"))?;
//! let index = builder.build();
//! assert!(index.contains("ko"));
//! ```

use super::Document;
use crate::error::{AdvisoryDiffError, LoadErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Snapshot of advisory documents, one per package name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    documents: BTreeMap<String, Document>,
}

impl Index {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index, keeping the last document seen for each package name.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut index = Self::new();
        for document in documents {
            if let Some(previous) = index.insert(document) {
                tracing::warn!(
                    "Duplicate package '{}' in index, keeping the last document",
                    previous.name()
                );
            }
        }
        index
    }

    /// Insert a document, returning any document it replaced.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.name().to_string(), document)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Documents sorted by package name.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Package names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of advisories across all documents.
    #[must_use]
    pub fn advisory_count(&self) -> usize {
        self.documents.values().map(Document::advisory_count).sum()
    }
}

impl FromIterator<Document> for Index {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::from_documents(iter)
    }
}

/// Builder that rejects duplicate package names.
#[derive(Debug, Default)]
#[must_use]
pub struct IndexBuilder {
    documents: BTreeMap<String, Document>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; fails if its package name is already present.
    pub fn try_add(&mut self, document: Document) -> Result<()> {
        match self.documents.entry(document.name().to_string()) {
            Entry::Occupied(entry) => Err(AdvisoryDiffError::load(
                "building index",
                LoadErrorKind::DuplicatePackage(entry.key().clone()),
            )),
            Entry::Vacant(entry) => {
                entry.insert(document);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[must_use]
    pub fn build(self) -> Index {
        Index {
            documents: self.documents,
        }
    }
}
