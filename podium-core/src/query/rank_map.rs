//! Identity to canonical-rank lookups.

use std::collections::HashMap;

use serde::Serialize;

use super::sorting::{RankedEntry, compare_rank};

/// 1-based canonical rank per entry id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankMap {
    ranks: HashMap<String, usize>,
}

impl RankMap {
    pub fn get(&self, id: &str) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.ranks.iter().map(|(id, rank)| (id.as_str(), *rank))
    }
}

/// Rank every entry by sorting borrowed references; `entries` keeps its
/// order.
pub fn build_rank_map<E: RankedEntry>(entries: &[E]) -> RankMap {
    let ranks = canonical_order(entries)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| (entry.id().to_string(), index + 1))
        .collect();
    RankMap { ranks }
}

/// Entries in canonical rank order, borrowed.
pub fn canonical_order<E: RankedEntry>(entries: &[E]) -> Vec<&E> {
    let mut refs: Vec<&E> = entries.iter().collect();
    refs.sort_by(|a, b| compare_rank(*a, *b));
    refs
}

/// An entry paired with its canonical rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<E> {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: E,
}

impl<E: RankedEntry> Ranked<E> {
    /// Pair `entry` with its rank from `ranks`. Entries unknown to the map
    /// rank after everything else.
    pub fn from_map(entry: E, ranks: &RankMap) -> Self {
        let rank = ranks.get(entry.id()).unwrap_or(ranks.len() + 1);
        Self { rank, entry }
    }
}
