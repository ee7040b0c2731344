//! String helpers shared by the filters.

use std::collections::HashSet;

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
pub(crate) fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Deduplicate `values`, keeping first-occurrence order.
pub(crate) fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
