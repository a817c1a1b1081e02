//! Entity comparator.
//!
//! Compares two versions of one entity and produces a field-level
//! [`EntityDiff`].
//!
//! ```
//! use schemex_core::diff::compare_entities;
//! use schemex_core::model::{Entity, Property};
//!
//! let old = Entity::new("Ledger").with_property(Property::primitive("Parent", "String"));
//! let new = Entity::new("Ledger").with_property(Property::primitive("Parent", "Number"));
//! let diff = compare_entities(&old, &new);
//! assert!(diff.modified_properties.contains_key("Parent"));
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: any two well-formed entities compare; identical input yields
//!   the empty diff.
//! - **Complete**: name, meta and properties are always all evaluated.
//! - **Deterministic**: every collection is ordered by key.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::compare_entities;
pub use human_summary::render_entity_summary;
pub use model::{EntityDiff, MetaChange, PropertyChange};
