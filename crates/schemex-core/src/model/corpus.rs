//! Version index: which entity names exist in which version

use crate::errors::{ExError, SchemexError};
use crate::model::version::compare_versions;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from version id to the ordered entity names published in it.
///
/// Serialized as a plain JSON object (`{"v1": ["Ledger", "Group"]}`), the
/// shape of a corpus `_index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusIndex {
    versions: BTreeMap<String, Vec<String>>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name list for a version
    pub fn insert_version<I, S>(&mut self, version: impl Into<String>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions
            .insert(version.into(), names.into_iter().map(Into::into).collect());
    }

    pub fn with_version<I, S>(mut self, version: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_version(version, names);
        self
    }

    pub fn entity_names(&self, version: &str) -> Option<&[String]> {
        self.versions.get(version).map(Vec::as_slice)
    }

    /// Sorted, de-duplicated names of `version` whose name contains
    /// `filter`, ignoring case. A blank filter matches every name.
    ///
    /// `None` when the version is not in the index.
    pub fn matching_entity_names(&self, version: &str, filter: &str) -> Option<Vec<&str>> {
        let needle = filter.trim().to_lowercase();
        let names: BTreeSet<&str> = self
            .entity_names(version)?
            .iter()
            .map(String::as_str)
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect();
        Some(names.into_iter().collect())
    }

    pub fn contains_version(&self, version: &str) -> bool {
        self.versions.contains_key(version)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn versions_newest_first(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = self.versions.keys().map(String::as_str).collect();
        versions.sort_by(|a, b| compare_versions(b, a));
        versions
    }

    /// Default comparison pair: second-newest → newest
    pub fn default_comparison(&self) -> Option<(&str, &str)> {
        match self.versions_newest_first().as_slice() {
            [newest, previous, ..] => Some((*previous, *newest)),
            _ => None,
        }
    }
}

/// Parse a corpus index document.
///
/// # Errors
///
/// `InvalidIndex` when the bytes are not a JSON object of string arrays.
pub fn parse_index_bytes(bytes: &[u8]) -> Result<CorpusIndex, ExError> {
    serde_json::from_slice(bytes).map_err(|e| {
        ExError::from(SchemexError::InvalidIndex {
            reason: format!("index is not an object of name lists: {}", e),
        })
        .with_op("parse_index_bytes")
    })
}
