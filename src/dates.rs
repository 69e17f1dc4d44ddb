use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub use crate::constants::dates::{DATE_FORMATS, NAIVE_DATETIME_FORMATS};
use crate::constants::scoring::SECONDS_PER_DAY;

/// Parse a publish timestamp from corpus text.
///
/// Accepts RFC 3339 (any offset, normalized to UTC), naive date-times, and
/// date-only values; naive values are read as UTC. Returns `None` when no
/// layout matches, which callers treat as "maximally old".
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Fractional days elapsed from `published_at` to `now`.
///
/// Negative when `published_at` lies in the future.
pub fn elapsed_days(now: DateTime<Utc>, published_at: DateTime<Utc>) -> f64 {
    let elapsed = now.signed_duration_since(published_at);
    elapsed.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

/// Serde adapter for `Option<DateTime<Utc>>` fields fed by hand-written corpora.
///
/// Unparsable or non-string values deserialize to `None` rather than failing the
/// whole document. Present values serialize as RFC 3339.
pub mod lenient_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::parse_published_at;

    /// Deserialize an optional timestamp, mapping anything unparsable to `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .and_then(parse_published_at))
    }

    /// Serialize an optional timestamp as RFC 3339 or `null`.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => {
                serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            None => serializer.serialize_none(),
        }
    }
}
