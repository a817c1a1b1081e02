//! Reconciliation output types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Names that differ between two versions.
///
/// Sets are ordered, so iteration is alphabetical. A name appears in at
/// most one of the three sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusChangeSet {
    /// Only in the target version
    pub added: BTreeSet<String>,
    /// Only in the source version
    pub removed: BTreeSet<String>,
    /// In both, and the comparison found changes
    pub modified: BTreeSet<String>,
}

impl CorpusChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}

/// A common name whose comparison failed and was left out of the change set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntity {
    pub name: String,
    /// Stable `ERR_*` code of the failure
    pub code: String,
    pub message: String,
}

/// Full result of one reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub change_set: CorpusChangeSet,
    /// Common names that compared clean
    pub unchanged: usize,
    /// Sorted by name
    pub skipped: Vec<SkippedEntity>,
}

/// Reconciliation of two named versions of a corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionComparison {
    pub from_version: String,
    pub to_version: String,
    pub report: ReconcileReport,
}
