//! Human-readable summary renderer for entity diffs.

use crate::diff::model::EntityDiff;
use crate::model::Property;
use std::collections::BTreeMap;

/// Render a Markdown summary of one entity's changes between two versions.
///
/// Informational only; the structured [`EntityDiff`] is the source of truth.
pub fn render_entity_summary(
    entity_name: &str,
    from_version: &str,
    to_version: &str,
    diff: &EntityDiff,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {entity_name}\n\n"));
    out.push_str(&format!("`{from_version}` → `{to_version}`\n\n"));

    if !diff.has_changes {
        out.push_str("_No changes detected._\n");
        return out;
    }

    if diff.name_changed {
        out.push_str(&format!(
            "**Renamed**: `{}` → `{}`\n\n",
            diff.old_name, diff.new_name
        ));
    }

    // Meta
    if !diff.added_meta.is_empty() || !diff.deleted_meta.is_empty() || !diff.modified_meta.is_empty()
    {
        out.push_str("### Metadata Changes\n\n");
        for (key, value) in &diff.added_meta {
            out.push_str(&format!("- **{}** added: `{}`\n", key, value));
        }
        for (key, value) in &diff.deleted_meta {
            out.push_str(&format!("- **{}** removed (was `{}`)\n", key, value));
        }
        for (key, change) in &diff.modified_meta {
            out.push_str(&format!(
                "- **{}**: `{}` → `{}`\n",
                key, change.old_value, change.new_value
            ));
        }
        out.push('\n');
    }

    render_property_table(&mut out, "Added Properties", &diff.added_properties);
    render_property_table(&mut out, "Deleted Properties", &diff.deleted_properties);

    if !diff.modified_properties.is_empty() {
        out.push_str(&format!(
            "### Modified Properties ({})\n\n",
            diff.modified_properties.len()
        ));
        out.push_str("| Property | Old Type | New Type | Old Repeated | New Repeated |\n");
        out.push_str("|---|---|---|---|---|\n");
        for (name, change) in &diff.modified_properties {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                name,
                change.old.type_label(),
                change.new.type_label(),
                change.old.repeated_label(),
                change.new.repeated_label()
            ));
        }
        out.push('\n');
    }

    out
}

pub(crate) fn render_property_table(
    out: &mut String,
    title: &str,
    properties: &BTreeMap<String, Property>,
) {
    if properties.is_empty() {
        return;
    }
    out.push_str(&format!("### {} ({})\n\n", title, properties.len()));
    out.push_str("| Property | Type | Repeated |\n|---|---|---|\n");
    for property in properties.values() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            property.name,
            property.type_label(),
            property.repeated_label()
        ));
    }
    out.push('\n');
}
