//! schemex core - version-to-version change engine for schema corpora
//!
//! This crate provides:
//! - Entity/property documents, the version index and the entity page view (`model`)
//! - The entity comparator producing field-level diffs (`diff`)
//! - The corpus reconciler classifying names as added/removed/modified
//!   across two versions (`reconcile`)
//! - The `CorpusSource` fetch seam and an in-memory source (`source`)
//! - Structured errors and logging shared by the other crates
//!
//! The engine performs no I/O of its own; all documents arrive through a
//! `CorpusSource` or as arguments.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod reconcile;
pub mod source;

// Used by the exported logging macros
#[doc(hidden)]
pub use schemex_core_types;

// Re-export commonly used types
pub use diff::{compare_entities, EntityDiff};
pub use errors::{ExError, ExErrorKind, Result, SchemexError};
pub use model::{CorpusIndex, Entity, Property};
pub use reconcile::{reconcile, reconcile_versions, CorpusChangeSet, ReconcileOptions};
pub use source::{CorpusSource, MemoryCorpus};
