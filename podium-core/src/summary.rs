//! Aggregate tiles for a leaderboard.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::query::rank_map::{Ranked, canonical_order};
use crate::query::sorting::RankedEntry;

/// Number of entries shown on the podium.
pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAverage {
    pub id: &'static str,
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary<E> {
    pub count: usize,
    pub averages: Vec<MetricAverage>,
    pub best_overall: Option<Ranked<E>>,
    pub freshest: Option<Ranked<E>>,
    pub freshest_evaluated_at: Option<DateTime<Utc>>,
    pub podium: Vec<Ranked<E>>,
}

/// Summarize a collection. Averages are zero for an empty collection; the
/// freshest entry is the most recent evaluation, ties going to the better
/// ranked entry.
pub fn summarize<E: RankedEntry>(entries: &[E]) -> LeaderboardSummary<E> {
    let ordered = canonical_order(entries);
    let count = entries.len();

    let averages = E::summary_metrics()
        .iter()
        .map(|metric| {
            let total: f64 = entries.iter().map(|entry| metric.read(entry)).sum();
            MetricAverage {
                id: metric.id,
                label: metric.label,
                value: if count == 0 { 0.0 } else { total / count as f64 },
            }
        })
        .collect();

    let ranked = |index: usize, entry: &E| Ranked {
        rank: index + 1,
        entry: entry.clone(),
    };

    let mut freshest: Option<(usize, &E)> = None;
    for (index, entry) in ordered.iter().enumerate() {
        let newer = freshest
            .is_none_or(|(_, best)| entry.last_evaluated() > best.last_evaluated());
        if newer {
            freshest = Some((index, *entry));
        }
    }

    LeaderboardSummary {
        count,
        averages,
        best_overall: ordered.first().map(|entry| ranked(0, *entry)),
        freshest_evaluated_at: freshest.map(|(_, entry)| entry.last_evaluated()),
        freshest: freshest.map(|(index, entry)| ranked(index, entry)),
        podium: ordered
            .iter()
            .take(PODIUM_SIZE)
            .enumerate()
            .map(|(index, entry)| ranked(index, *entry))
            .collect(),
    }
}
