use schemex_core::model::{Entity, Property};

/// Ledger entity as published in an older release
#[allow(dead_code)]
pub fn ledger_v1() -> Entity {
    Entity::new("Ledger")
        .with_meta("Category", "Masters")
        .with_meta("Description", "Account ledger")
        .with_property(Property::primitive("Parent", "String"))
        .with_property(Property::primitive("Opening Balance", "Amount"))
        .with_property(Property::complex("Address", "Address Details").with_meta("Is Repeated", "Yes"))
}

/// Ledger entity as published in a newer release
///
/// Differs from [`ledger_v1`] by: one modified meta value, one added meta
/// key, one added property, one deleted property, one modified property.
#[allow(dead_code)]
pub fn ledger_v2() -> Entity {
    Entity::new("Ledger")
        .with_meta("Category", "Accounting Masters")
        .with_meta("Description", "Account ledger")
        .with_meta("Since", "v2")
        .with_property(Property::primitive("Parent", "Number"))
        .with_property(Property::complex("Address", "Address Details").with_meta("Is Repeated", "Yes"))
        .with_property(Property::primitive("GSTIN", "String"))
}

/// Owned name list from string literals
#[allow(dead_code)]
pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
