//! Timestamp parsing for export fields.
//!
//! Used through `#[serde(with = "timestamp")]` on every date-time field of the
//! data model, so a malformed value fails the enclosing entity.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// ISO 8601 layout with a colon-less offset (`+0000`), which RFC 3339 rejects.
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Naive layouts accepted when the value carries no UTC offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a date-time string as found in Claude exports.
///
/// Values with an offset are converted to UTC; naive values are taken as UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_str(value, OFFSET_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_datetime_rfc3339() {
        let dt = parse_datetime("2024-01-01T00:00:01Z").unwrap();
        assert_eq!(dt.second(), 1);
    }

    #[test]
    fn test_parse_datetime_with_offset_and_fraction() {
        let dt = parse_datetime("2025-03-10T18:25:48.612345+02:00").unwrap();
        assert_eq!(dt.hour(), 16);
        assert_eq!(dt.day(), 10);
    }

    #[test]
    fn test_parse_datetime_offset_without_colon() {
        let dt = parse_datetime("2024-01-01T00:00:00+0000").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let dt = parse_datetime("2024-01-01T05:30:00.250+0530").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_datetime_naive_is_utc() {
        let dt = parse_datetime("2024-06-30T12:00:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-30T12:00:00+00:00");
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("yesterday").is_none());
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("2024-13-01T00:00:00Z").is_none());
    }
}
