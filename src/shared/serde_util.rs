//! Custom helpers for backend wire formats.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a backend timestamp into `DateTime<Utc>`.
///
/// The backend mostly sends RFC 3339 (`2024-03-04T12:22:40Z`), but some order
/// fields come without an offset (`2024-03-04T12:22:40.123`). Those are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a UTC instant the way the intraday endpoints expect it.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a calendar date for the day-candle endpoints (`YYYY-MM-DD`).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Serializes `Option<DateTime<Utc>>` as an RFC 3339 string or `null`.
pub mod opt_timestamp {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&super::format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }
}
