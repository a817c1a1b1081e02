//! Entity and property documents
//!
//! One JSON document per (version, entity name):
//!
//! ```json
//! {
//!   "Name": "Ledger",
//!   "Meta": { "Category": "Masters" },
//!   "Properties": {
//!     "Parent": { "Name": "Parent", "IsComplex": false, "Meta": { "Datatype": "String" } }
//!   }
//! }
//! ```

use crate::errors::{ExError, SchemexError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Open string-keyed metadata bag. Ordered so diffs and renders are deterministic.
pub type Meta = BTreeMap<String, String>;

/// Well-known property meta keys
pub const META_DATATYPE: &str = "Datatype";
pub const META_OBJECT_NAME: &str = "Object Name";
pub const META_IS_REPEATED: &str = "Is Repeated";

const REQUIRED_ENTITY_FIELDS: &[&str] = &["Name", "Meta", "Properties"];

/// A named, versioned schema document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Meta")]
    pub meta: Meta,
    #[serde(rename = "Properties")]
    pub properties: BTreeMap<String, Property>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: Meta::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Insert a property keyed by its own name
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }
}

/// A single typed field of an entity
///
/// Equality is structural over name, complexity flag and every meta entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "Name")]
    pub name: String,
    /// True when the value references another entity rather than a primitive
    #[serde(rename = "IsComplex")]
    pub is_complex: bool,
    #[serde(rename = "Meta")]
    pub meta: Meta,
}

impl Property {
    pub fn new(name: impl Into<String>, is_complex: bool) -> Self {
        Self {
            name: name.into(),
            is_complex,
            meta: Meta::new(),
        }
    }

    /// Primitive property with a `Datatype`
    pub fn primitive(name: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::new(name, false).with_meta(META_DATATYPE, datatype)
    }

    /// Complex property referencing another entity by `Object Name`
    pub fn complex(name: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self::new(name, true).with_meta(META_OBJECT_NAME, object_name)
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn datatype(&self) -> Option<&str> {
        self.meta.get(META_DATATYPE).map(String::as_str)
    }

    /// Name of the referenced entity; only meaningful for complex properties
    pub fn object_name(&self) -> Option<&str> {
        if self.is_complex {
            self.meta.get(META_OBJECT_NAME).map(String::as_str)
        } else {
            None
        }
    }

    pub fn is_repeated(&self) -> bool {
        self.meta.get(META_IS_REPEATED).map(String::as_str) == Some("Yes")
    }

    /// Display value for `Is Repeated`; absent reads as "No"
    pub fn repeated_label(&self) -> &str {
        self.meta
            .get(META_IS_REPEATED)
            .map(String::as_str)
            .unwrap_or("No")
    }

    /// What a property table shows in its type column
    pub fn type_label(&self) -> &str {
        self.object_name()
            .or_else(|| self.datatype())
            .unwrap_or("N/A")
    }
}

/// Parse and validate one entity document.
///
/// A document missing `Meta` or `Properties` is rejected rather than read as
/// empty: a truncated file must never look like every field was deleted.
///
/// # Errors
///
/// - `InvalidEntity`: not UTF-8, not JSON, root not an object, or a
///   property/meta value with the wrong shape
/// - `MissingField`: `Name`, `Meta` or `Properties` absent
pub fn parse_entity_bytes(bytes: &[u8]) -> Result<Entity, ExError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::from(SchemexError::InvalidEntity {
            reason: format!("document is not valid UTF-8: {}", e),
        })
        .with_op("parse_entity_bytes")
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::from(SchemexError::InvalidEntity {
            reason: format!("document is not valid JSON: {}", e),
        })
        .with_op("parse_entity_bytes")
    })?;

    let obj = raw.as_object().ok_or_else(|| {
        ExError::from(SchemexError::InvalidEntity {
            reason: "document root must be an object".to_string(),
        })
        .with_op("parse_entity_bytes")
    })?;

    for field in REQUIRED_ENTITY_FIELDS {
        if !obj.contains_key(*field) {
            return Err(ExError::from(SchemexError::MissingField {
                field: field.to_string(),
            })
            .with_op("parse_entity_bytes"));
        }
    }

    serde_json::from_value(raw).map_err(|e| {
        ExError::from(SchemexError::InvalidEntity {
            reason: format!("document does not match the entity shape: {}", e),
        })
        .with_op("parse_entity_bytes")
    })
}
