//! Commonly used query types and functions

pub use super::filtering::{filter_entries, normalize_search};
pub use super::pagination::{Page, paginate};
pub use super::rank_map::{RankMap, Ranked, build_rank_map, canonical_order};
pub use super::sorting::{
    DirectedSort, FieldSpec, MetricSpec, RankProfile, RankedEntry, SortField,
    compare_rank, sort_entries, sorted_refs,
};
pub use super::types::{LeaderboardQuery, QueryPage};
