//! `lastmod` normalization.
//!
//! Every accepted representation is interpreted as an instant and rendered
//! as `YYYY-MM-DDTHH:MM:SS.sssZ`.
//!
//! # Accepted text forms
//!
//! - RFC 3339 / ISO 8601 with offset: `2020-01-08T12:17:06+02:00`
//! - RFC 2822: `Wed, 08 Jan 2020 12:17:06 GMT`
//! - ISO date-time without offset: `2020-01-08T12:17:06`, `2020-01-08 12:17`
//! - ISO date: `2020-01-08`, `2020/01/08`
//! - Long form: `December 17, 1995 03:24:00`, `Dec 17, 1995`, `17 December 1995`
//!
//! Text without an offset is read as UTC.

use crate::config::DateLike;
use crate::error::{Result, SitemapError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%d %B %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];

/// Normalize a date to an ISO-8601 UTC string with millisecond precision.
///
/// Fails with [`SitemapError::InvalidDate`] when the value is not an instant.
pub fn normalize_date(value: &DateLike) -> Result<String> {
    let instant = match value {
        DateLike::Instant(dt) => *dt,
        DateLike::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms)
            .ok_or_else(|| SitemapError::invalid_date(ms.to_string()))?,
        DateLike::Text(text) => {
            parse_text(text.trim()).ok_or_else(|| SitemapError::invalid_date(text.as_str()))?
        }
    };
    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn normalize(value: impl Into<DateLike>) -> String {
        normalize_date(&value.into()).unwrap()
    }

    #[test]
    fn test_three_representations_agree() {
        let expected = "1995-12-17T03:24:00.000Z";
        let instant = Utc.with_ymd_and_hms(1995, 12, 17, 3, 24, 0).unwrap();

        assert_eq!(normalize("December 17, 1995 03:24:00"), expected);
        assert_eq!(normalize(instant), expected);
        assert_eq!(normalize(instant.timestamp_millis()), expected);
    }

    #[test]
    fn test_epoch_millis() {
        assert_eq!(normalize(1_578_485_826_000_i64), "2020-01-08T12:17:06.000Z");
        assert_eq!(normalize(0_i64), "1970-01-01T00:00:00.000Z");
        assert_eq!(normalize(1_578_485_826_123_i64), "2020-01-08T12:17:06.123Z");
    }

    #[test]
    fn test_text_forms() {
        for (input, expected) in [
            ("2020-01-01", "2020-01-01T00:00:00.000Z"),
            ("2020/01/01", "2020-01-01T00:00:00.000Z"),
            ("2018-06-24T10:30:00Z", "2018-06-24T10:30:00.000Z"),
            ("2018-06-24T12:30:00+02:00", "2018-06-24T10:30:00.000Z"),
            ("2018-06-24T10:30:00.250Z", "2018-06-24T10:30:00.250Z"),
            ("2018-06-24T10:30:00", "2018-06-24T10:30:00.000Z"),
            ("2018-06-24 10:30", "2018-06-24T10:30:00.000Z"),
            ("Wed, 08 Jan 2020 12:17:06 GMT", "2020-01-08T12:17:06.000Z"),
            ("Dec 17, 1995", "1995-12-17T00:00:00.000Z"),
            ("17 December 1995", "1995-12-17T00:00:00.000Z"),
            ("  2020-01-01  ", "2020-01-01T00:00:00.000Z"),
        ] {
            assert_eq!(normalize(input), expected, "failed for {input:?}");
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize("December 17, 1995 03:24:00");
        assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn test_invalid_dates() {
        for input in ["", "not a date", "2020-13-01", "2023-02-29", "December 40, 1995"] {
            let err = normalize_date(&DateLike::from(input)).unwrap_err();
            assert!(
                matches!(err, SitemapError::InvalidDate { .. }),
                "expected InvalidDate for {input:?}"
            );
        }
        assert!(normalize_date(&DateLike::EpochMillis(i64::MAX)).is_err());
    }
}
