//! Entity diff output types.
//!
//! All collections are `BTreeMap` so serialized output is deterministic.

use crate::model::{Meta, Property};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-level difference between two versions of one entity.
///
/// Every map is populated (possibly empty) so consumers can process diffs
/// uniformly. When `has_changes` is false all six maps are empty and
/// `name_changed` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDiff {
    pub has_changes: bool,
    /// Properties only in the new entity
    pub added_properties: BTreeMap<String, Property>,
    /// Properties only in the old entity
    pub deleted_properties: BTreeMap<String, Property>,
    /// Properties in both whose values differ
    pub modified_properties: BTreeMap<String, PropertyChange>,
    /// Meta keys only in the new entity, with the new value
    pub added_meta: Meta,
    /// Meta keys only in the old entity, with the old value
    pub deleted_meta: Meta,
    /// Meta keys in both whose values differ
    pub modified_meta: BTreeMap<String, MetaChange>,
    /// True when the entity's own `Name` differs between the documents
    pub name_changed: bool,
    pub old_name: String,
    pub new_name: String,
}

impl EntityDiff {
    /// Number of individual field-level changes, not counting a rename
    pub fn change_count(&self) -> usize {
        self.added_properties.len()
            + self.deleted_properties.len()
            + self.modified_properties.len()
            + self.added_meta.len()
            + self.deleted_meta.len()
            + self.modified_meta.len()
    }
}

/// Old and new values of a property present in both versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChange {
    pub old: Property,
    pub new: Property,
}

/// Old and new values of a meta key present in both versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaChange {
    pub old_value: String,
    pub new_value: String,
}
