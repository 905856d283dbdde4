//! Core traits for rankable leaderboard entries
//!
//! A leaderboard variant plugs into the generic engine by describing its
//! identity fields, its rank profile and its table of sortable fields.

use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use podium_model::{ModelError, SubScore};

use super::fields::{FieldSpec, MetricSpec, RankProfile};

/// Base trait for any entry that can be ranked on a leaderboard
pub trait RankedEntry: Clone + Send + Sync + 'static {
    /// The set of columns this entry type can be sorted by
    type SortKey: SortField<Entry = Self>;

    /// Prefix used to synthesize identifiers for records without one
    const ID_PREFIX: &'static str;

    /// Primary score and ordered tie-break metrics for the canonical rank
    fn rank_profile() -> &'static RankProfile<Self>;

    /// Metrics averaged on the summary view
    fn summary_metrics() -> &'static [MetricSpec<Self>];

    fn id(&self) -> &str;

    fn display_name(&self) -> &str;

    /// Categorical grouping (provider, dataset profile)
    fn group(&self) -> &str;

    /// Optional classification tag
    fn family(&self) -> Option<&str>;

    fn last_evaluated(&self) -> DateTime<Utc>;

    /// Measured auxiliary scores, in display order
    fn sub_scores(&self) -> Vec<SubScore>;
}

/// A sortable column of a leaderboard variant
///
/// Each key resolves to a static [`FieldSpec`] that declares how to read
/// the value and which end of it is better.
pub trait SortField:
    Copy
    + Eq
    + Hash
    + Default
    + Display
    + FromStr<Err = ModelError>
    + Send
    + Sync
    + 'static
{
    type Entry: RankedEntry;

    /// The key that orders by canonical rank
    const RANK: Self;

    fn spec(self) -> &'static FieldSpec<Self::Entry>;
}
