//! Markdown view of a single entity document

use crate::diff::human_summary::render_property_table;
use crate::model::Entity;

/// Render one entity as published in `version`: its metadata followed by a
/// property table in the same layout as the diff summary.
///
/// Blank metadata values are not shown.
pub fn render_entity_view(version: &str, entity: &Entity) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", entity.name));
    out.push_str(&format!("Version `{version}`\n\n"));

    let meta: Vec<(&String, &String)> = entity
        .meta
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();
    if !meta.is_empty() {
        out.push_str("### Metadata\n\n| Key | Value |\n|---|---|\n");
        for (key, value) in meta {
            out.push_str(&format!("| {} | {} |\n", key, value));
        }
        out.push('\n');
    }

    if entity.properties.is_empty() {
        out.push_str("_No properties._\n");
    } else {
        render_property_table(&mut out, "Properties", &entity.properties);
    }

    out
}
