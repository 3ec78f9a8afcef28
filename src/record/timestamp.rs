//! Last-modified timestamp parsing and canonicalization.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};

use crate::error_handling::{RecordField, ValidationError};

/// Date/time layouts that carry an explicit offset, tried after RFC 3339 and RFC 2822.
const OFFSET_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M%z",
];

/// Date/time layouts without an offset; interpreted as UTC.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts; interpreted as midnight UTC.
const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Raw last-modified input: a timestamp parsed by the caller, or text.
#[derive(Debug, Clone, PartialEq)]
pub enum LastModified {
    /// Already a calendar date/time
    Parsed(DateTime<FixedOffset>),
    /// Text in one of the recognised layouts
    Text(String),
}

impl From<DateTime<FixedOffset>> for LastModified {
    fn from(value: DateTime<FixedOffset>) -> Self {
        LastModified::Parsed(value)
    }
}

impl From<DateTime<Utc>> for LastModified {
    fn from(value: DateTime<Utc>) -> Self {
        LastModified::Parsed(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for LastModified {
    fn from(value: NaiveDateTime) -> Self {
        LastModified::Parsed(value.and_utc().fixed_offset())
    }
}

impl From<NaiveDate> for LastModified {
    fn from(value: NaiveDate) -> Self {
        LastModified::from(value.and_time(NaiveTime::MIN))
    }
}

impl From<&str> for LastModified {
    fn from(value: &str) -> Self {
        LastModified::Text(value.to_string())
    }
}

impl From<String> for LastModified {
    fn from(value: String) -> Self {
        LastModified::Text(value)
    }
}

impl LastModified {
    /// Resolves the input to a timestamp.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for the `lastMod` field when the text matches
    /// none of the recognised layouts.
    pub fn resolve(&self) -> Result<DateTime<FixedOffset>, ValidationError> {
        match self {
            LastModified::Parsed(dt) => Ok(*dt),
            LastModified::Text(text) => parse_timestamp(text),
        }
    }
}

/// Parses a last-modified string into a timestamp.
///
/// Accepts RFC 3339, RFC 2822, ISO-like date/times with or without offset,
/// and plain dates. Inputs without an offset are taken as UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            RecordField::LastMod,
            "timestamp is empty",
        ));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt);
    }
    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, layout) {
            return Ok(dt);
        }
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
        }
    }

    Err(ValidationError::new(
        RecordField::LastMod,
        format!("'{text}' is not a recognised date/time"),
    ))
}

/// Canonical stored form: ISO-8601 with seconds and a numeric offset,
/// e.g. `2024-01-15T10:30:00+00:00`.
pub fn canonical_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn canonical(text: &str) -> String {
        canonical_timestamp(&parse_timestamp(text).expect("should parse"))
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        assert_eq!(canonical("2024-01-15"), "2024-01-15T00:00:00+00:00");
        assert_eq!(canonical("2024/01/15"), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_rfc3339_keeps_offset() {
        assert_eq!(
            canonical("2024-01-15T10:30:00+02:00"),
            "2024-01-15T10:30:00+02:00"
        );
        assert_eq!(canonical("2024-01-15T10:30:00Z"), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_fractional_seconds_are_dropped() {
        assert_eq!(
            canonical("2024-01-15T10:30:00.123456Z"),
            "2024-01-15T10:30:00+00:00"
        );
    }

    #[test]
    fn test_rfc2822() {
        assert_eq!(
            canonical("Mon, 15 Jan 2024 10:30:00 +0000"),
            "2024-01-15T10:30:00+00:00"
        );
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        assert_eq!(canonical("2024-01-15 10:30:00"), "2024-01-15T10:30:00+00:00");
        assert_eq!(canonical("2024-01-15T10:30"), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_offset_without_colon() {
        assert_eq!(
            canonical("2024-01-15 10:30:00 +0530"),
            "2024-01-15T10:30:00+05:30"
        );
    }

    #[test]
    fn test_rejects_unparseable_text() {
        for text in ["", "   ", "yesterday-ish", "2024-13-45", "15/01/2024 maybe"] {
            let err = parse_timestamp(text).unwrap_err();
            assert_eq!(err.field, RecordField::LastMod, "input: {text:?}");
        }
    }

    #[test]
    fn test_canonical_form_round_trips_to_same_date() {
        let stored = canonical("2024-01-15");
        let reparsed = DateTime::parse_from_rfc3339(&stored).expect("canonical form is RFC 3339");
        assert_eq!(
            (reparsed.year(), reparsed.month(), reparsed.day()),
            (2024, 1, 15)
        );
        assert_eq!(reparsed.hour(), 0);
    }

    #[test]
    fn test_native_inputs() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(
            canonical_timestamp(&LastModified::from(utc).resolve().unwrap()),
            "2024-01-15T10:30:00+00:00"
        );

        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            canonical_timestamp(&LastModified::from(date).resolve().unwrap()),
            "2024-01-15T00:00:00+00:00"
        );
    }
}
