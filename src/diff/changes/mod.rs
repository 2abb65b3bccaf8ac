//! Change computer implementations.
//!
//! This module provides concrete implementations of the `ChangeComputer` trait
//! for the two nested layers: advisories within a document, and documents
//! within an index.

mod advisories;
mod documents;

pub use advisories::AdvisoryChangeComputer;
pub use documents::DocumentChangeComputer;
