//! Composite leaderboard queries: filter, then sort, then paginate.

use podium_model::SortDirection;
use serde::Serialize;

use super::filtering::filter_entries;
use super::pagination::paginate;
use super::rank_map::{RankMap, Ranked};
use super::sorting::{RankedEntry, SortField, sorted_refs};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One listing request against a leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardQuery<K> {
    pub search: String,
    pub sort: K,
    pub direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl<K: Default> Default for LeaderboardQuery<K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: K::default(),
            direction: SortDirection::default(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<K> LeaderboardQuery<K> {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: K, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// Result of a [`LeaderboardQuery`]: one page of ranked entries and the
/// clamped paging state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<E> {
    pub items: Vec<Ranked<E>>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub sort: String,
    pub direction: SortDirection,
}

impl<K> LeaderboardQuery<K>
where
    K: SortField,
    K::Entry: RankedEntry<SortKey = K>,
{
    /// Run the query over `entries`. Ranks attached to the items come from
    /// `ranks`, so they stay canonical regardless of filter or sort.
    pub fn execute(
        &self,
        entries: &[K::Entry],
        ranks: &RankMap,
    ) -> QueryPage<K::Entry> {
        let filtered = filter_entries(entries, &self.search);
        let ordered = sorted_refs(&*filtered, self.sort, self.direction);
        let window = paginate(ordered.as_slice(), self.page, self.page_size);

        tracing::debug!(
            search = %self.search,
            sort = %self.sort,
            direction = %self.direction,
            matched = window.total_items,
            page = window.page,
            "executed leaderboard query"
        );

        QueryPage {
            items: window
                .items
                .iter()
                .map(|entry| Ranked::from_map((*entry).clone(), ranks))
                .collect(),
            page: window.page,
            page_size: window.page_size,
            total_pages: window.total_pages,
            total_items: window.total_items,
            sort: self.sort.to_string(),
            direction: self.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use podium_model::{AlgorithmEntry, AlgorithmSortKey};

    use super::*;
    use crate::query::rank_map::build_rank_map;
    use crate::test_support::trio;

    fn run(query: LeaderboardQuery<AlgorithmSortKey>) -> QueryPage<AlgorithmEntry> {
        let entries = trio();
        let ranks = build_rank_map(&entries);
        query.execute(&entries, &ranks)
    }

    fn item_ids(page: &QueryPage<AlgorithmEntry>) -> Vec<(&str, usize)> {
        page.items
            .iter()
            .map(|item| (item.entry.id.as_str(), item.rank))
            .collect()
    }

    #[test]
    fn default_query_lists_by_composite_descending() {
        let page = run(LeaderboardQuery::default());
        assert_eq!(item_ids(&page), [("b", 1), ("a", 2), ("c", 3)]);
        assert_eq!(page.sort, "compositeScore");
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn filtered_items_keep_their_canonical_rank() {
        let page = run(LeaderboardQuery::default().with_search("gan"));
        assert_eq!(item_ids(&page), [("c", 3)]);
        assert_eq!(page.total_items, 1);
    }

    #[test]
    fn pages_are_clamped_after_filtering() {
        let page = run(
            LeaderboardQuery::default()
                .with_sort(AlgorithmSortKey::Ber, SortDirection::Desc)
                .with_page(9, 2),
        );
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(item_ids(&page), [("b", 1)]);
    }
}
