//! Coercion of loosely typed records into strict leaderboard entries.
//!
//! Raw records come from a generated JSON file and are never trusted: any
//! field may be missing or carry the wrong type. Normalization degrades to
//! documented defaults instead of failing, so one bad record never takes the
//! whole collection down.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// Construction of a strict entry from a raw JSON record.
pub trait Normalize: Sized {
    /// Build an entry from `raw`, found at position `index` of its source
    /// sequence. Never fails.
    fn normalize(raw: &Value, index: usize) -> Self;
}

/// Normalize every record of a source sequence, preserving order.
pub fn normalize_all<E: Normalize>(records: &[Value]) -> Vec<E> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| E::normalize(raw, index))
        .collect()
}

/// Coerce a raw value to a finite number, substituting `fallback` when the
/// value is absent, `null`, of an unusable type, or not finite.
///
/// Strings are trimmed before parsing and an empty string reads as zero.
pub fn coerce_number(value: Option<&Value>, fallback: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(fallback)
}

/// Like [`coerce_number`] but keeps "not measured" distinct from zero:
/// absent and `null` stay `None`.
pub fn coerce_optional_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(coerce_number(Some(v), 0.0)),
    }
}

/// Parse a timestamp into a UTC instant, falling back to the Unix epoch.
///
/// Accepted shapes: RFC 3339, RFC 2822, a naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// (read as UTC) and a bare `YYYY-MM-DD` (midnight UTC).
pub fn coerce_timestamp(value: Option<&Value>) -> DateTime<Utc> {
    match value {
        Some(Value::String(s)) => parse_timestamp(s.trim()),
        _ => None,
    }
    .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Read-only view over a raw record. Anything that is not a JSON object
/// behaves like an empty object.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RawRecord<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self {
            fields: raw.as_object(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }

    /// Identifier, or `<prefix>-<index + 1>` when missing or blank.
    pub fn id(&self, key: &str, prefix: &str, index: usize) -> String {
        scalar_text(self.get(key))
            .unwrap_or_else(|| format!("{prefix}-{}", index + 1))
    }

    /// Display text, or `placeholder` when missing or blank.
    pub fn text(&self, key: &str, placeholder: &str) -> String {
        scalar_text(self.get(key)).unwrap_or_else(|| placeholder.to_string())
    }

    pub fn optional_text(&self, key: &str) -> Option<String> {
        scalar_text(self.get(key))
    }

    pub fn number(&self, key: &str) -> f64 {
        coerce_number(self.get(key), 0.0)
    }

    pub fn number_or(&self, key: &str, fallback: f64) -> f64 {
        coerce_number(self.get(key), fallback)
    }

    pub fn optional_number(&self, key: &str) -> Option<f64> {
        coerce_optional_number(self.get(key))
    }

    pub fn timestamp(&self, key: &str) -> DateTime<Utc> {
        coerce_timestamp(self.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn numbers_fall_back_when_not_finite_or_unusable() {
        assert_eq!(coerce_number(Some(&json!(42.5)), 0.0), 42.5);
        assert_eq!(coerce_number(Some(&json!(" 7 ")), 0.0), 7.0);
        assert_eq!(coerce_number(Some(&json!("")), 3.0), 0.0);
        assert_eq!(coerce_number(Some(&json!("abc")), 3.0), 3.0);
        assert_eq!(coerce_number(Some(&json!("NaN")), 1.0), 1.0);
        assert_eq!(coerce_number(Some(&json!("inf")), 1.0), 1.0);
        assert_eq!(coerce_number(Some(&json!(true)), 0.0), 1.0);
        assert_eq!(coerce_number(Some(&json!(null)), 1.0), 1.0);
        assert_eq!(coerce_number(Some(&json!([1, 2])), 2.0), 2.0);
        assert_eq!(coerce_number(None, 1.0), 1.0);
    }

    #[test]
    fn optional_numbers_keep_missing_distinct_from_zero() {
        assert_eq!(coerce_optional_number(None), None);
        assert_eq!(coerce_optional_number(Some(&json!(null))), None);
        assert_eq!(coerce_optional_number(Some(&json!(0))), Some(0.0));
        assert_eq!(coerce_optional_number(Some(&json!("oops"))), Some(0.0));
    }

    #[test]
    fn timestamps_accept_common_shapes_and_default_to_epoch() {
        let expected = Utc.with_ymd_and_hms(2026, 2, 24, 10, 0, 0).unwrap();
        for raw in [
            "2026-02-24T10:00:00.000Z",
            "2026-02-24T11:00:00+01:00",
            "2026-02-24T10:00:00",
            "2026-02-24 10:00:00",
            "Tue, 24 Feb 2026 10:00:00 +0000",
        ] {
            assert_eq!(coerce_timestamp(Some(&json!(raw))), expected, "{raw}");
        }

        assert_eq!(
            coerce_timestamp(Some(&json!("2026-02-24"))),
            Utc.with_ymd_and_hms(2026, 2, 24, 0, 0, 0).unwrap()
        );
        assert_eq!(
            coerce_timestamp(Some(&json!("yesterday"))),
            DateTime::<Utc>::UNIX_EPOCH
        );
        assert_eq!(
            coerce_timestamp(Some(&json!(1_700_000_000))),
            DateTime::<Utc>::UNIX_EPOCH
        );
        assert_eq!(coerce_timestamp(None), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn raw_record_treats_non_objects_as_empty() {
        let raw = json!(["not", "an", "object"]);
        let record = RawRecord::new(&raw);
        assert_eq!(record.id("id", "alg", 4), "alg-5");
        assert_eq!(record.text("name", "Unknown name"), "Unknown name");
        assert_eq!(record.optional_text("family"), None);
    }

    #[test]
    fn raw_record_text_rules() {
        let raw = json!({ "id": 17, "name": "   ", "family": "", "tag": "GAN" });
        let record = RawRecord::new(&raw);
        assert_eq!(record.id("id", "alg", 0), "17");
        assert_eq!(record.text("name", "Unknown name"), "Unknown name");
        assert_eq!(record.optional_text("family"), None);
        assert_eq!(record.optional_text("tag").as_deref(), Some("GAN"));
    }
}
