//! Human-readable summary renderer for version comparisons.

use crate::reconcile::model::VersionComparison;
use std::collections::BTreeSet;

/// Render a Markdown summary of a corpus-level comparison.
///
/// Lists are alphabetical. Skipped names are shown last so a partial
/// report is visibly partial.
pub fn render_change_set_summary(comparison: &VersionComparison) -> String {
    let report = &comparison.report;
    let cs = &report.change_set;
    let mut out = String::new();

    out.push_str(&format!(
        "## Changes from `{}` to `{}`\n\n",
        comparison.from_version, comparison.to_version
    ));
    out.push_str(&format!(
        "**Added**: {}  \n**Removed**: {}  \n**Modified**: {}  \n**Unchanged**: {}\n\n",
        cs.added.len(),
        cs.removed.len(),
        cs.modified.len(),
        report.unchanged
    ));

    if cs.is_empty() && report.skipped.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    render_name_list(&mut out, "Added", &cs.added);
    render_name_list(&mut out, "Removed", &cs.removed);
    render_name_list(&mut out, "Modified", &cs.modified);

    if !report.skipped.is_empty() {
        out.push_str(&format!("### Skipped ({})\n\n", report.skipped.len()));
        for skipped in &report.skipped {
            out.push_str(&format!("- `{}` ({})\n", skipped.name, skipped.code));
        }
        out.push('\n');
    }

    out
}

fn render_name_list(out: &mut String, title: &str, names: &BTreeSet<String>) {
    if names.is_empty() {
        return;
    }
    out.push_str(&format!("### {} ({})\n\n", title, names.len()));
    for name in names {
        out.push_str(&format!("- {}\n", name));
    }
    out.push('\n');
}
