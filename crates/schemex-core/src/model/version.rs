//! Presentation ordering for version identifiers
//!
//! Version ids are a short prefix followed by a release number (`v7`,
//! `v12`). Ordering is numeric on the release number so `v10` follows `v9`.

use std::cmp::Ordering;

/// Release number of a version id, if it has one
pub fn version_number(version: &str) -> Option<u64> {
    let digits = version.trim_start_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Total order over version ids, oldest first.
///
/// Ids with a release number sort by it; ids without one sort before them
/// in plain string order. Equal numbers fall back to string order.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (version_number(a), version_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
