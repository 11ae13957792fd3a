//! Intake timestamp rules for robot records.
//!
//! A robot's `created` timestamp arrives as a string. Values with an
//! explicit offset are honored and normalized to UTC; naive ISO-8601 values
//! are interpreted as UTC. A timestamp strictly after the current instant is
//! rejected.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Naive ISO-8601 layouts accepted for `created` (interpreted as UTC).
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Errors that can occur when validating a `created` timestamp.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CreatedError {
    /// The input is not a recognizable ISO-8601 timestamp.
    #[error("created must be an ISO-8601 timestamp")]
    Unparsable,
    /// The timestamp lies strictly after the current instant.
    #[error("Date cannot be in the future.")]
    Future,
}

/// Parse a `created` timestamp.
///
/// Accepts RFC 3339 (offset normalized to UTC) and naive ISO-8601 with a
/// `T` or space separator and optional fractional seconds, interpreted as
/// UTC.
///
/// # Errors
///
/// Returns [`CreatedError::Unparsable`] if no accepted layout matches.
pub fn parse_created(s: &str) -> Result<DateTime<Utc>, CreatedError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(CreatedError::Unparsable)
}

/// Check that `created` is not strictly after `now`.
///
/// The comparison is timezone-aware; both values are UTC instants. Passing
/// `now` explicitly keeps the rule a pure function.
///
/// # Errors
///
/// Returns [`CreatedError::Future`] if `created > now`.
pub fn validate_not_future(created: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), CreatedError> {
    if created > now {
        return Err(CreatedError::Future);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_naive_t_separator() {
        let dt = parse_created("2024-12-16T10:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 12, 16, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_space_separator() {
        let dt = parse_created("2024-12-16 10:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 12, 16, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_utc() {
        let dt = parse_created("2023-01-01T12:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized() {
        let dt = parse_created("2023-01-01T12:00:00+03:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert!(parse_created("2024-12-16T10:00:00.250").is_ok());
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_created("not-a-date"), Err(CreatedError::Unparsable));
        assert_eq!(parse_created(""), Err(CreatedError::Unparsable));
        assert_eq!(parse_created("2024-12-16"), Err(CreatedError::Unparsable));
    }

    #[test]
    fn test_future_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 12, 16, 10, 0, 0).unwrap();
        let future = now + chrono::Duration::seconds(1);
        assert_eq!(validate_not_future(future, now), Err(CreatedError::Future));
    }

    #[test]
    fn test_past_and_present_accepted() {
        let now = Utc.with_ymd_and_hms(2024, 12, 16, 10, 0, 0).unwrap();
        let past = now - chrono::Duration::days(365);
        assert_eq!(validate_not_future(past, now), Ok(()));
        // "now" itself is not strictly in the future.
        assert_eq!(validate_not_future(now, now), Ok(()));
    }
}
