//! Unix timestamp ↔ date-time conversion.
//!
//! Epoch precision is auto-detected by magnitude: values at or beyond 10^12
//! (absolute) are treated as milliseconds, everything else as seconds. That
//! boundary is Sep 2001 in milliseconds and ~33,700 AD in seconds, so real
//! inputs are unambiguous.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("'{0}' is not a valid integer timestamp")]
    NotANumber(String),
    #[error("timestamp {0} is out of the representable range")]
    OutOfRange(i64),
    #[error("'{0}' is not a recognized date-time (try YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)")]
    BadDateTime(String),
}

/// Epoch precision of an input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Seconds,
    Milliseconds,
}

/// A timestamp resolved to UTC, with the precision that was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimestamp {
    pub utc: DateTime<Utc>,
    pub precision: Precision,
}

const MILLIS_CUTOVER: i64 = 1_000_000_000_000;

/// Parse an epoch value (seconds or milliseconds, auto-detected) to UTC.
pub fn from_epoch(input: &str) -> Result<ResolvedTimestamp, TimestampError> {
    let raw: i64 = input
        .trim()
        .parse()
        .map_err(|_| TimestampError::NotANumber(input.trim().to_string()))?;

    let (precision, utc) = if raw.abs() >= MILLIS_CUTOVER {
        (Precision::Milliseconds, DateTime::from_timestamp_millis(raw))
    } else {
        (Precision::Seconds, DateTime::from_timestamp(raw, 0))
    };
    let utc = utc.ok_or(TimestampError::OutOfRange(raw))?;
    Ok(ResolvedTimestamp { utc, precision })
}

/// Parse a date-time string to epoch seconds (UTC).
///
/// Accepted forms, tried in order: RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS`, bare `YYYY-MM-DD` (midnight).
pub fn to_epoch(input: &str) -> Result<i64, TimestampError> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc().timestamp());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        // Midnight always exists for a valid NaiveDate
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc().timestamp());
        }
    }
    Err(TimestampError::BadDateTime(s.to_string()))
}

/// The current epoch in seconds.
pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_precision_resolves() {
        let resolved = from_epoch("1700000000").unwrap();
        assert_eq!(resolved.precision, Precision::Seconds);
        assert_eq!(resolved.utc.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn milliseconds_are_detected_by_magnitude() {
        let resolved = from_epoch("1700000000000").unwrap();
        assert_eq!(resolved.precision, Precision::Milliseconds);
        assert_eq!(resolved.utc.timestamp(), 1_700_000_000);
    }

    #[test]
    fn epoch_zero_is_1970() {
        let resolved = from_epoch("0").unwrap();
        assert_eq!(resolved.utc.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn negative_epochs_are_pre_1970() {
        let resolved = from_epoch("-86400").unwrap();
        assert_eq!(resolved.utc.to_rfc3339(), "1969-12-31T00:00:00+00:00");
    }

    #[test]
    fn non_numeric_input_is_an_error() {
        assert!(matches!(
            from_epoch("yesterday"),
            Err(TimestampError::NotANumber(_))
        ));
    }

    #[test]
    fn to_epoch_accepts_common_forms() {
        assert_eq!(to_epoch("2023-11-14 22:13:20").unwrap(), 1_700_000_000);
        assert_eq!(to_epoch("2023-11-14T22:13:20").unwrap(), 1_700_000_000);
        assert_eq!(to_epoch("1970-01-01").unwrap(), 0);
        assert_eq!(to_epoch("2023-11-14T22:13:20+00:00").unwrap(), 1_700_000_000);
    }

    #[test]
    fn to_epoch_respects_rfc3339_offsets() {
        assert_eq!(to_epoch("2023-11-15T00:13:20+02:00").unwrap(), 1_700_000_000);
    }

    #[test]
    fn to_epoch_rejects_garbage() {
        assert!(to_epoch("14/11/2023").is_err());
    }

    #[test]
    fn epoch_roundtrip() {
        let epoch = 1_700_000_000;
        let resolved = from_epoch(&epoch.to_string()).unwrap();
        let text = resolved.utc.format("%Y-%m-%d %H:%M:%S").to_string();
        assert_eq!(to_epoch(&text).unwrap(), epoch);
    }
}
