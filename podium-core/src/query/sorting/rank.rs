//! The canonical rank comparator

use std::cmp::Ordering;

use super::keys::compare_names;
use super::traits::RankedEntry;

/// Strict total order defining canonical rank (`Less` = `a` ranks first).
///
/// Walks the variant's rank profile (primary score, then each tie-break
/// metric), then display name at base strength, then id. Ids are unique
/// within a collection, so two distinct entries never compare equal.
pub fn compare_rank<E: RankedEntry>(a: &E, b: &E) -> Ordering {
    let profile = E::rank_profile();

    profile
        .primary
        .compare(a, b)
        .then_with(|| {
            profile
                .tie_breakers
                .iter()
                .map(|metric| metric.compare(a, b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| compare_names(a.display_name(), b.display_name()))
        .then_with(|| a.id().cmp(b.id()))
}
