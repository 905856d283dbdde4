use std::cmp::Ordering;

use podium_model::{AlgorithmSortKey, SortDirection};

use super::*;
use crate::test_support::{algorithm, at, ids, trio};

#[test]
fn canonical_rank_orders_the_trio() {
    let entries = trio();
    let ranked = sort_entries(&entries, AlgorithmSortKey::Rank, SortDirection::Asc);
    assert_eq!(ids(&ranked), ["b", "a", "c"]);

    let reversed = sort_entries(&entries, AlgorithmSortKey::Rank, SortDirection::Desc);
    assert_eq!(ids(&reversed), ["c", "a", "b"]);
}

#[test]
fn input_is_left_untouched() {
    let entries = trio();
    let snapshot = entries.clone();
    let _ = sort_entries(&entries, AlgorithmSortKey::Ber, SortDirection::Desc);
    assert_eq!(entries, snapshot);
}

#[test]
fn lower_is_better_fields_list_smallest_first_ascending() {
    let entries = trio();
    let asc = sort_entries(&entries, AlgorithmSortKey::Ber, SortDirection::Asc);
    assert_eq!(ids(&asc), ["b", "a", "c"]);

    let desc = sort_entries(&entries, AlgorithmSortKey::Ber, SortDirection::Desc);
    assert_eq!(ids(&desc), ["c", "a", "b"]);
}

#[test]
fn higher_is_better_fields_list_largest_first_descending() {
    let entries = trio();
    let desc = sort_entries(&entries, AlgorithmSortKey::PayloadBpp, SortDirection::Desc);
    assert_eq!(ids(&desc), ["c", "a", "b"]);

    let asc = sort_entries(&entries, AlgorithmSortKey::PayloadBpp, SortDirection::Asc);
    assert_eq!(ids(&asc), ["b", "a", "c"]);
}

#[test]
fn last_evaluated_descending_is_most_recent_first() {
    let entries = trio();
    let desc = sort_entries(&entries, AlgorithmSortKey::LastEvaluated, SortDirection::Desc);
    assert_eq!(ids(&desc), ["b", "a", "c"]);

    let asc = sort_entries(&entries, AlgorithmSortKey::LastEvaluated, SortDirection::Asc);
    assert_eq!(ids(&asc), ["c", "a", "b"]);
}

#[test]
fn ssim_descending_lists_highest_similarity_first() {
    let mut entries = trio();
    entries[0].ssim = 0.91;
    entries[1].ssim = 0.99;
    entries[2].ssim = 0.95;

    let desc = sort_entries(&entries, AlgorithmSortKey::Ssim, SortDirection::Desc);
    assert_eq!(ids(&desc), ["b", "c", "a"]);
}

#[test]
fn field_ties_fall_back_to_canonical_rank() {
    let entries = trio();
    // Equal composite for a and b: canonical order puts b first.
    let desc = sort_entries(&entries, AlgorithmSortKey::CompositeScore, SortDirection::Desc);
    assert_eq!(ids(&desc), ["b", "a", "c"]);
}

#[test]
fn full_ties_are_broken_by_name_then_id() {
    let when = at(24, 10);
    let first = algorithm("z", "alpha", "P", "F", 90.0, 40.0, 0.01, 0.4, when);
    let second = algorithm("y", "Beta", "P", "F", 90.0, 40.0, 0.01, 0.4, when);
    assert_eq!(compare_rank(&first, &second), Ordering::Less);

    let twin_a = algorithm("id-1", "Same", "P", "F", 90.0, 40.0, 0.01, 0.4, when);
    let twin_b = algorithm("id-2", "SAME", "P", "F", 90.0, 40.0, 0.01, 0.4, when);
    assert_eq!(compare_rank(&twin_a, &twin_b), Ordering::Less);
    assert_eq!(compare_rank(&twin_b, &twin_a), Ordering::Greater);
    assert_eq!(compare_rank(&twin_a, &twin_a), Ordering::Equal);
}

#[test]
fn sorting_is_idempotent() {
    let entries = trio();
    for key in AlgorithmSortKey::all() {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let once = sort_entries(&entries, *key, direction);
            let twice = sort_entries(&once, *key, direction);
            assert_eq!(once, twice, "{key} {direction}");
        }
    }
}

#[test]
fn directed_sort_reports_reversal() {
    let plan = DirectedSort::<podium_model::AlgorithmEntry>::for_key(
        AlgorithmSortKey::Ber,
        SortDirection::Desc,
    );
    assert!(plan.is_reversed());
    let plan = DirectedSort::<podium_model::AlgorithmEntry>::for_key(
        AlgorithmSortKey::Rank,
        SortDirection::Asc,
    );
    assert!(!plan.is_reversed());
}
