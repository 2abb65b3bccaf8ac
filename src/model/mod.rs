//! Value types for advisory data.
//!
//! An [`Index`] maps package names to [`Document`]s; each document holds an
//! ordered list of [`Advisory`] records, and each advisory an ordered
//! timeline of [`Event`]s. All types are plain owned values with structural
//! equality, so two snapshots can be compared without shared state.

mod advisory;
mod document;
mod index;

pub use advisory::*;
pub use document::*;
pub use index::*;
