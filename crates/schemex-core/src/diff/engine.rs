//! Entity comparison engine.

use crate::diff::model::{EntityDiff, MetaChange, PropertyChange};
use crate::model::{Entity, Property};
use std::collections::BTreeMap;

/// Keyed three-way partition of two maps.
struct KeyedDelta<V> {
    added: BTreeMap<String, V>,
    deleted: BTreeMap<String, V>,
    changed: BTreeMap<String, (V, V)>,
}

impl<V> KeyedDelta<V> {
    fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty() && self.changed.is_empty()
    }
}

/// Partition keys into added (new only), deleted (old only) and changed
/// (both, values unequal). Deleted entries carry the old value.
fn keyed_delta<V: PartialEq + Clone>(
    old: &BTreeMap<String, V>,
    new: &BTreeMap<String, V>,
) -> KeyedDelta<V> {
    let mut delta = KeyedDelta {
        added: BTreeMap::new(),
        deleted: BTreeMap::new(),
        changed: BTreeMap::new(),
    };

    for (key, new_value) in new {
        match old.get(key) {
            None => {
                delta.added.insert(key.clone(), new_value.clone());
            }
            Some(old_value) if old_value != new_value => {
                delta
                    .changed
                    .insert(key.clone(), (old_value.clone(), new_value.clone()));
            }
            Some(_) => {}
        }
    }

    for (key, old_value) in old {
        if !new.contains_key(key) {
            delta.deleted.insert(key.clone(), old_value.clone());
        }
    }

    delta
}

/// Compare two versions of one entity.
///
/// Name, meta and properties are evaluated independently and in full; a
/// rename alone marks the diff as changed. Meta values compare by exact
/// string equality and properties by structural equality, so an empty
/// string is a value distinct from an absent key.
pub fn compare_entities(old: &Entity, new: &Entity) -> EntityDiff {
    let name_changed = old.name != new.name;

    let meta: KeyedDelta<String> = keyed_delta(&old.meta, &new.meta);
    let properties: KeyedDelta<Property> = keyed_delta(&old.properties, &new.properties);

    let has_changes = name_changed || !meta.is_empty() || !properties.is_empty();

    let modified_meta: BTreeMap<String, MetaChange> = meta
        .changed
        .into_iter()
        .map(|(key, (old_value, new_value))| {
            (
                key,
                MetaChange {
                    old_value,
                    new_value,
                },
            )
        })
        .collect();

    let modified_properties: BTreeMap<String, PropertyChange> = properties
        .changed
        .into_iter()
        .map(|(key, (old, new))| (key, PropertyChange { old, new }))
        .collect();

    EntityDiff {
        has_changes,
        added_properties: properties.added,
        deleted_properties: properties.deleted,
        modified_properties,
        added_meta: meta.added,
        deleted_meta: meta.deleted,
        modified_meta,
        name_changed,
        old_name: old.name.clone(),
        new_name: new.name.clone(),
    }
}
