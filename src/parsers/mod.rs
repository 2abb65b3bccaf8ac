//! Advisory document parsers.
//!
//! Documents are YAML files keyed by package name. The module provides:
//! - cheap detection of advisory documents among unrelated YAML files
//! - full parsing with validation of per-document invariants
//! - directory loading into an [`Index`](crate::model::Index)
//! - `#nolint:` directive scanning
//!
//! ## Usage
//!
//! ```no_run
//! use advisory_diff::parsers::{load_index, parse_document};
//! use std::path::Path;
//!
//! let doc = parse_document(Path::new("advisories/ko.advisories.yaml")).unwrap();
//! println!("{}: {} advisories", doc.name(), doc.advisory_count());
//!
//! let loaded = load_index(Path::new("advisories")).unwrap();
//! println!("{} documents", loaded.index.len());
//! ```

mod detection;
mod document;
mod loader;
mod nolint;

pub use detection::is_advisory_document;
pub use document::{parse_document, parse_document_str, validate_document};
pub use loader::{ADVISORY_FILE_SUFFIX, DocumentSource, LoadedIndex, load_index, load_packages};
pub use nolint::find_nolint;
