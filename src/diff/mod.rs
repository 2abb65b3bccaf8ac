//! Structural diff engine for advisory indices.
//!
//! # Architecture
//!
//! Three layers compose top-down, each matching entities by key and
//! delegating non-identical pairs to the layer below:
//!
//! - [`DiffEngine`]: documents within an index, matched by package name
//! - [`DocumentChangeComputer`](changes::DocumentChangeComputer): advisories
//!   within a document, matched by identifier
//! - [`AdvisoryChangeComputer`](changes::AdvisoryChangeComputer): full
//!   before/after snapshots plus the added/removed timeline events
//!
//! The layers share [`partition_by_key`] for keyed set partitioning and the
//! [`Equivalent`] trait for structural equality.
//!
//! # Example
//!
//! ```ignore
//! use advisory_diff::diff::DiffEngine;
//!
//! let engine = DiffEngine::new();
//! let result = engine.diff(&old_index, &new_index);
//!
//! for doc in &result.modified {
//!     println!("{}: {} advisories changed", doc.name, doc.total());
//! }
//! ```

pub mod changes;
mod engine;
mod partition;
mod result;
pub mod traits;

pub use engine::{DiffEngine, index_diff};
pub use partition::{Partition, key_map, membership_difference, partition_by_key};
pub use result::{DiffResult, DiffSummary, DocumentDiffResult, IndexDiffResult};
pub use traits::{ChangeComputer, Equivalent, Keyed};
