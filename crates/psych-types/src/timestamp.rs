//! Entry lifecycle timestamps.
//!
//! Entry documents store `createdAt`/`updatedAt` either as RFC 3339 instants
//! (`2026-02-05T00:00:00.000Z`) or as bare dates (`2025-01-30`). Bare dates
//! are read as midnight UTC. Timestamps are always written back as RFC 3339
//! with millisecond precision.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Parses an RFC 3339 instant or a `YYYY-MM-DD` date.
///
/// # Examples
///
/// ```
/// use psych_types::timestamp::{format_timestamp, parse_timestamp};
///
/// let instant = parse_timestamp("2026-02-05T00:00:00.000Z").unwrap();
/// let date = parse_timestamp("2026-02-05").unwrap();
/// assert_eq!(instant, date);
/// assert_eq!(format_timestamp(&date), "2026-02-05T00:00:00.000Z");
///
/// assert!(parse_timestamp("05/02/2026").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    let midnight = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

/// Formats a timestamp the way entry documents store it.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `#[serde(with = "...")]` adapter for entry timestamps.
#[cfg(feature = "serde")]
pub(crate) mod serde_format {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(d)?;
        super::parse_timestamp(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{text}'")))
    }
}
