//! Sorting strategies
//!
//! A strategy is a best-first comparator. [`DirectedSort`] pairs one with
//! the requested direction: the entries are ordered best-first and the whole
//! sequence is reversed when the caller asked for the opposite order. Ties
//! are always broken by the canonical comparator before any reversal, so a
//! reversed listing is the exact mirror of the best-first one.

use std::cmp::Ordering;

use podium_model::SortDirection;

use super::fields::FieldSpec;
use super::rank::compare_rank;
use super::traits::{RankedEntry, SortField};

/// A best-first ordering over entries
pub trait SortStrategy<E>: Send + Sync {
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

/// Canonical rank order
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSort;

impl<E: RankedEntry> SortStrategy<E> for RankSort {
    fn compare(&self, a: &E, b: &E) -> Ordering {
        compare_rank(a, b)
    }
}

/// Single field, best-first, falling back to canonical rank on ties
#[derive(Debug)]
pub struct FieldSort<E: 'static> {
    spec: &'static FieldSpec<E>,
}

impl<E: RankedEntry> FieldSort<E> {
    pub fn new(spec: &'static FieldSpec<E>) -> Self {
        Self { spec }
    }
}

impl<E: RankedEntry> SortStrategy<E> for FieldSort<E> {
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self.spec
            .compare(a, b)
            .then_with(|| compare_rank(a, b))
    }
}

/// A strategy plus the decision whether to mirror its result
pub struct DirectedSort<E> {
    strategy: Box<dyn SortStrategy<E>>,
    reverse: bool,
}

impl<E: RankedEntry> DirectedSort<E> {
    /// Resolve a sort key and direction into a concrete plan.
    pub fn for_key(key: E::SortKey, direction: SortDirection) -> Self {
        let spec = key.spec();
        let strategy: Box<dyn SortStrategy<E>> = if spec.is_rank() {
            Box::new(RankSort)
        } else {
            Box::new(FieldSort::new(spec))
        };

        Self {
            strategy,
            reverse: direction != spec.better.best_first(),
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Order borrowed entries in place.
    pub fn apply(&self, items: &mut [&E]) {
        items.sort_by(|a, b| self.strategy.compare(a, b));
        if self.reverse {
            items.reverse();
        }
    }
}

impl<E> std::fmt::Debug for DirectedSort<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectedSort")
            .field("reverse", &self.reverse)
            .finish_non_exhaustive()
    }
}

/// Borrowing variant of [`sort_entries`].
pub fn sorted_refs<E: RankedEntry>(
    entries: &[E],
    key: E::SortKey,
    direction: SortDirection,
) -> Vec<&E> {
    let mut refs: Vec<&E> = entries.iter().collect();
    DirectedSort::for_key(key, direction).apply(&mut refs);
    refs
}

/// Return a new sequence ordered by `key` in `direction`; the input is
/// left untouched.
pub fn sort_entries<E: RankedEntry>(
    entries: &[E],
    key: E::SortKey,
    direction: SortDirection,
) -> Vec<E> {
    sorted_refs(entries, key, direction)
        .into_iter()
        .cloned()
        .collect()
}
