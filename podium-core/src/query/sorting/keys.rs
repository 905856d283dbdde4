//! Comparable keys extracted from leaderboard entries
//!
//! These wrap the raw values so that floats and display names get a total
//! order suitable for `sort_by`.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Numeric metric key (scores, error rates, costs)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MetricKey(OrderedFloat<f64>);

impl MetricKey {
    pub fn new(value: f64) -> Self {
        MetricKey(OrderedFloat(value))
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

/// Instant key for evaluation timestamps
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstantKey(DateTime<Utc>);

impl InstantKey {
    pub fn new(value: DateTime<Utc>) -> Self {
        InstantKey(value)
    }
}

/// Display-name key compared at "base" strength: case and diacritics are
/// ignored, so `Éclair` and `eclair` compare equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: &str) -> Self {
        NameKey(fold_name(name))
    }
}

/// Decompose, drop combining marks, lowercase.
pub fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two display names at base strength without allocating a key
/// for the common ASCII case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        let a = a.bytes().map(|c| c.to_ascii_lowercase());
        let b = b.bytes().map(|c| c.to_ascii_lowercase());
        return a.cmp(b);
    }
    NameKey::new(a).cmp(&NameKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_ignore_case_and_diacritics() {
        assert_eq!(compare_names("HUGO", "hugo"), Ordering::Equal);
        assert_eq!(compare_names("Éclair", "eclair"), Ordering::Equal);
        assert_eq!(compare_names("Ångström", "angstrom"), Ordering::Equal);
        assert_eq!(compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_names("Zeta", "éta"), Ordering::Greater);
    }

    #[test]
    fn metric_keys_order_numerically() {
        assert!(MetricKey::new(0.009) < MetricKey::new(0.010));
        assert_eq!(MetricKey::new(-0.0), MetricKey::new(0.0));
        assert_eq!(MetricKey::new(41.5).value(), 41.5);
    }
}
