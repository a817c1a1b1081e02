//! Path layout for a corpus tree
//!
//! Versions and entity names become path segments verbatim, so each must be
//! a single, non-traversing segment.

use crate::errors::{invalid_entity_name, invalid_version, Result};
use std::path::{Path, PathBuf};

/// File name of the version index at the corpus root
pub const INDEX_FILE: &str = "_index.json";

const DOCUMENT_EXTENSION: &str = "json";

/// `<root>/_index.json`
pub fn index_path(root: &Path) -> PathBuf {
    root.join(INDEX_FILE)
}

/// `<root>/<version>/<name>.json`
///
/// # Errors
///
/// `InvalidInput` when either segment is empty, `.`/`..`, or contains a
/// path separator or NUL.
pub fn entity_path(root: &Path, version: &str, name: &str) -> Result<PathBuf> {
    if !is_plain_segment(version) {
        return Err(invalid_version(version));
    }
    if !is_plain_segment(name) {
        return Err(invalid_entity_name(name));
    }
    Ok(root
        .join(version)
        .join(format!("{}.{}", name, DOCUMENT_EXTENSION)))
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0'])
}
