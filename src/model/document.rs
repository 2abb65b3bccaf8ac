//! Per-package advisory documents.

use super::Advisory;
use serde::{Deserialize, Serialize};

/// Schema version written by current tooling.
pub const DEFAULT_SCHEMA_VERSION: &str = "2.0.1";

/// Package identity of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
}

/// One package's advisory data.
///
/// The derived `PartialEq` compares advisories in sequence order. The diff
/// engine instead compares documents with advisories keyed by identifier;
/// see [`crate::diff::Equivalent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Document {
    pub schema_version: String,
    pub package: Package,
    #[serde(default)]
    pub advisories: Vec<Advisory>,
}

impl Document {
    /// Create an empty document for a package at the current schema version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
            package: Package { name: name.into() },
            advisories: Vec::new(),
        }
    }

    /// Override the schema version tag.
    #[must_use]
    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        self.schema_version = version.into();
        self
    }

    /// Append an advisory.
    #[must_use]
    pub fn with_advisory(mut self, advisory: Advisory) -> Self {
        self.advisories.push(advisory);
        self
    }

    /// Package name, the document's join key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.package.name
    }

    /// Look up an advisory by identifier. With duplicate identifiers the last one wins.
    #[must_use]
    pub fn advisory(&self, id: &str) -> Option<&Advisory> {
        self.advisories.iter().rev().find(|a| a.id == id)
    }

    #[must_use]
    pub fn advisory_count(&self) -> usize {
        self.advisories.len()
    }
}
