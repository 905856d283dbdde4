//! Free-text filtering of leaderboard entries.

use std::borrow::Cow;

use super::sorting::RankedEntry;

/// Normalize a user query: trimmed and lowercased, `None` when blank.
pub fn normalize_search(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Substring match of an already-normalized needle against name, group and
/// family.
pub fn matches_query<E: RankedEntry>(entry: &E, needle: &str) -> bool {
    entry.display_name().to_lowercase().contains(needle)
        || entry.group().to_lowercase().contains(needle)
        || entry
            .family()
            .is_some_and(|family| family.to_lowercase().contains(needle))
}

/// Keep the entries matching `query`, preserving their order.
///
/// A blank query borrows the input unchanged.
pub fn filter_entries<'a, E: RankedEntry>(
    entries: &'a [E],
    query: &str,
) -> Cow<'a, [E]> {
    match normalize_search(query) {
        None => Cow::Borrowed(entries),
        Some(needle) => Cow::Owned(
            entries
                .iter()
                .filter(|entry| matches_query(*entry, &needle))
                .cloned()
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, trio};

    #[test]
    fn matches_name_profile_and_family() {
        let entries = trio();
        assert_eq!(ids(filter_entries(&entries, "hugo").iter()), ["a"]);
        assert_eq!(ids(filter_entries(&entries, "  BOSSBase ").iter()), ["a", "b"]);
        assert_eq!(ids(filter_entries(&entries, "gan").iter()), ["c"]);
        assert!(filter_entries(&entries, "transformer").is_empty());
    }

    #[test]
    fn blank_query_borrows_the_input() {
        let entries = trio();
        for query in ["", "   "] {
            let result = filter_entries(&entries, query);
            assert!(matches!(result, Cow::Borrowed(_)));
            assert_eq!(result.len(), entries.len());
        }
    }

    #[test]
    fn entries_without_family_still_match_on_name() {
        let mut entries = trio();
        entries[2].algorithm_family = None;
        assert_eq!(ids(filter_entries(&entries, "stegano").iter()), ["c"]);
        assert!(filter_entries(&entries, "gan").iter().all(|e| e.id == "c"));
    }
}
