//! Lenient timestamp parsing for dataset exports.
//!
//! Comment exports carry timestamps in whatever format the scraper produced.
//! Zoned values keep their own wall-clock time: a comment posted at 21:00
//! `+07:00` counts towards hour 21, not the UTC hour.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats with a numeric UTC offset.
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%z",
];

/// Formats without offset, most common first.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a timestamp cell into a naive local date-time.
///
/// Returns `None` for blank or unrecognised input.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // Bare date: midnight.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn hm(dt: NaiveDateTime) -> (String, u32, u32) {
        (dt.date().to_string(), dt.hour(), dt.minute())
    }

    #[test]
    fn plain_datetime() {
        let dt = parse_timestamp("2025-02-10 14:32:05").unwrap();
        assert_eq!(hm(dt), ("2025-02-10".into(), 14, 32));
    }

    #[test]
    fn iso_with_t_and_fraction() {
        let dt = parse_timestamp("2025-02-10T14:32:05.250").unwrap();
        assert_eq!(hm(dt), ("2025-02-10".into(), 14, 32));
    }

    #[test]
    fn rfc3339_keeps_local_wall_clock() {
        let dt = parse_timestamp("2025-02-10T23:15:00+07:00").unwrap();
        assert_eq!(hm(dt), ("2025-02-10".into(), 23, 15));

        let utc = parse_timestamp("2025-02-10T23:15:00Z").unwrap();
        assert_eq!(hm(utc), ("2025-02-10".into(), 23, 15));
    }

    #[test]
    fn space_separated_with_offset() {
        let dt = parse_timestamp("2025-02-10 06:00:00+00:00").unwrap();
        assert_eq!(hm(dt), ("2025-02-10".into(), 6, 0));
    }

    #[test]
    fn minute_precision_and_us_style() {
        assert_eq!(
            hm(parse_timestamp("2025-02-10 09:41").unwrap()),
            ("2025-02-10".into(), 9, 41)
        );
        assert_eq!(
            hm(parse_timestamp("02/10/2025 18:05:00").unwrap()),
            ("2025-02-10".into(), 18, 5)
        );
    }

    #[test]
    fn bare_date_is_midnight() {
        let dt = parse_timestamp("2025-02-10").unwrap();
        assert_eq!(hm(dt), ("2025-02-10".into(), 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2025-13-40 10:00:00").is_none());
    }
}
