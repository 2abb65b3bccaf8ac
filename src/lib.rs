//! **Structural diffs of security advisory documents.**
//!
//! `advisory-diff` compares two snapshots of an advisory repository: a
//! directory of YAML documents, one per package, each listing the
//! vulnerabilities tracked for that package together with a timeline of
//! lifecycle events (detection, fixed, false positive determination, ...).
//!
//! The diff is computed in three layers:
//!
//! - **Index**: packages added, removed, or modified
//! - **Document**: advisories added, removed, or modified within a package
//! - **Advisory**: before/after snapshots plus the timeline events that were
//!   added or removed
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Index`], [`Document`], [`Advisory`] and [`Event`].
//! - **[`parsers`]**: Advisory document detection, parsing, validation and
//!   directory loading.
//! - **[`diff`]**: Home of the [`DiffEngine`].
//! - **[`reports`]**: Summary, JSON and Markdown report generators.
//! - **[`pipeline`]**: Load → diff → report orchestration shared by the CLI.
//! - **[`config`]**: YAML configuration files and validation.
//!
//! ## Diffing Two Directories
//!
//! ```no_run
//! use std::path::Path;
//! use advisory_diff::{DiffEngine, parsers::load_index};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = load_index(Path::new("old/advisories"))?;
//!     let new = load_index(Path::new("new/advisories"))?;
//!
//!     let diff = DiffEngine::new().diff(&old.index, &new.index);
//!
//!     for document in &diff.added {
//!         println!("+ {}", document.name());
//!     }
//!     for document in &diff.modified {
//!         for change in &document.modified {
//!             println!(
//!                 "~ {}/{}: +{} -{} events",
//!                 document.name,
//!                 change.id,
//!                 change.added_events.len(),
//!                 change.removed_events.len()
//!             );
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building Indices In Memory
//!
//! ```
//! use advisory_diff::{Advisory, Document, Event, EventType, Index, Timestamp, index_diff};
//!
//! let detected = Event::new(Timestamp::epoch(), EventType::Detection);
//! let old = Index::from_documents([
//!     Document::new("ko").with_advisory(Advisory::new("CVE-2023-24535").with_event(detected.clone())),
//! ]);
//! let new = Index::from_documents([
//!     Document::new("ko").with_advisory(
//!         Advisory::new("CVE-2023-24535")
//!             .with_event(detected)
//!             .with_event(Event::new(Timestamp::epoch().plus_days(1), EventType::Fixed)),
//!     ),
//! ]);
//!
//! let diff = index_diff(&old, &new);
//! assert_eq!(diff.modified[0].modified[0].added_events.len(), 1);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, LoaderConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, ValidateConfig};
pub use diff::{DiffEngine, DiffResult, DiffSummary, DocumentDiffResult, IndexDiffResult, index_diff};
pub use error::{AdvisoryDiffError, ErrorContext, Result};
pub use model::{
    Advisory, Document, Event, EventData, EventType, Index, IndexBuilder, Package, Timestamp,
};
pub use parsers::{LoadedIndex, load_index, parse_document, parse_document_str};
pub use reports::{ReportFormat, ReportGenerator};
