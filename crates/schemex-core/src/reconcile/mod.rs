//! Corpus reconciler.
//!
//! Partitions two versions' entity-name lists into added / removed /
//! common, then compares every common entity concurrently and reports the
//! ones that changed.
//!
//! Comparison failures are tolerated per entity: a failing name is left
//! out of `modified` and listed in [`ReconcileReport::skipped`] instead of
//! aborting the whole run.

pub mod engine;
pub mod model;
pub mod summary;

pub use engine::{diff_entity_versions, reconcile, reconcile_versions, ReconcileOptions};
pub use model::{CorpusChangeSet, ReconcileReport, SkippedEntity, VersionComparison};
pub use summary::render_change_set_summary;
