use ferret_crawler::SiteIndex;

/// Full scan of the index for a case-insensitive keyword match, returning
/// matching addresses in index insertion order.
///
/// An empty keyword matches every entry (the empty string is a substring
/// of everything); that is defined behavior, not an edge case. No ranking,
/// no deduplication (index keys are already unique).
pub fn search(index: &SiteIndex, keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();

    index
        .entries()
        .filter(|(_, text)| text.to_lowercase().contains(&needle))
        .map(|(address, _)| address.to_string())
        .collect()
}
