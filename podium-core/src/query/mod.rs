//! Query utilities for leaderboard collections
//!
//! Everything here is a pure function over a borrowed slice: the loaded
//! collection is never mutated and results are fresh sequences or borrowed
//! windows.

pub mod filtering;
pub mod pagination;
pub mod prelude;
pub mod rank_map;
pub mod sorting;
pub mod types;

pub use filtering::{filter_entries, normalize_search};
pub use pagination::{Page, paginate};
pub use rank_map::{RankMap, Ranked, build_rank_map};
pub use types::{LeaderboardQuery, QueryPage};
