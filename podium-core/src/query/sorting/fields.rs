//! Field declarations for ranking and sorting
//!
//! Every comparison the engine makes is driven by one of these static
//! tables. A field states once whether higher or lower values are better;
//! direction handling is derived from that declaration and never re-encoded
//! per key.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use podium_model::Better;

use super::keys::{InstantKey, MetricKey};

/// A numeric metric with a declared polarity
pub struct MetricSpec<E> {
    pub id: &'static str,
    pub label: &'static str,
    pub better: Better,
    pub value: fn(&E) -> f64,
}

impl<E> MetricSpec<E> {
    pub fn read(&self, entry: &E) -> f64 {
        (self.value)(entry)
    }

    /// Best-first ordering: `Less` when `a` is the better of the two.
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        let a = MetricKey::new(self.read(a));
        let b = MetricKey::new(self.read(b));
        match self.better {
            Better::Higher => b.cmp(&a),
            Better::Lower => a.cmp(&b),
        }
    }
}

impl<E> fmt::Debug for MetricSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricSpec")
            .field("id", &self.id)
            .field("better", &self.better)
            .finish()
    }
}

/// Primary score plus the ordered tie-break metrics of a variant
///
/// The canonical comparator walks `primary`, then each of `tie_breakers`,
/// then display name, then id.
pub struct RankProfile<E: 'static> {
    pub primary: MetricSpec<E>,
    pub tie_breakers: &'static [MetricSpec<E>],
}

impl<E> fmt::Debug for RankProfile<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankProfile")
            .field("primary", &self.primary)
            .field("tie_breakers", &self.tie_breakers)
            .finish()
    }
}

/// How a sortable field reads its value
pub enum FieldKind<E> {
    /// Canonical rank; no value of its own
    Rank,
    Metric(fn(&E) -> f64),
    Timestamp(fn(&E) -> DateTime<Utc>),
}

/// Declaration of one sortable column
pub struct FieldSpec<E> {
    pub id: &'static str,
    /// Which values list first when showing the best entries first.
    /// Rank is `Lower` (rank 1 first), timestamps are `Higher` (newest first).
    pub better: Better,
    pub kind: FieldKind<E>,
}

impl<E> FieldSpec<E> {
    pub fn is_rank(&self) -> bool {
        matches!(self.kind, FieldKind::Rank)
    }

    /// Best-first ordering on this field alone. Rank fields report every
    /// pair as equal and defer to the canonical comparator.
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        let natural = match &self.kind {
            FieldKind::Rank => return Ordering::Equal,
            FieldKind::Metric(read) => {
                MetricKey::new(read(a)).cmp(&MetricKey::new(read(b)))
            }
            FieldKind::Timestamp(read) => {
                InstantKey::new(read(a)).cmp(&InstantKey::new(read(b)))
            }
        };
        match self.better {
            Better::Higher => natural.reverse(),
            Better::Lower => natural,
        }
    }
}

impl<E> fmt::Debug for FieldSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            FieldKind::Rank => "rank",
            FieldKind::Metric(_) => "metric",
            FieldKind::Timestamp(_) => "timestamp",
        };
        f.debug_struct("FieldSpec")
            .field("id", &self.id)
            .field("better", &self.better)
            .field("kind", &kind)
            .finish()
    }
}
