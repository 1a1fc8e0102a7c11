//! Timestamp parsing and human-readable relative time.
//!
//! Distances use the wording and thresholds of date-fns `formatDistance`
//! ("about 2 hours", "over 1 year", ...).

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

use crate::error::{SnapError, SnapResult};

const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Timestamp layout used by Snapchat HTML exports, e.g. `2023-05-01 12:00:00 UTC`.
const EXPORT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const EXPORT_SUFFIX: &str = " UTC";

/// Parse a textual timestamp into an absolute instant.
///
/// Accepts RFC 3339 (any offset) and the Snapchat export layout
/// `YYYY-MM-DD HH:MM:SS UTC`.
pub fn parse_timestamp(raw: &str) -> SnapResult<DateTime<Utc>> {
    let value = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Some(naive) = value.strip_suffix(EXPORT_SUFFIX) {
        return NaiveDateTime::parse_from_str(naive, EXPORT_FORMAT)
            .map(|dt| dt.and_utc())
            .map_err(|e| SnapError::DataFormat {
                value: raw.to_string(),
                reason: e.to_string(),
            });
    }

    Err(SnapError::DataFormat {
        value: raw.to_string(),
        reason: "expected RFC 3339 or \"YYYY-MM-DD HH:MM:SS UTC\"".to_string(),
    })
}

/// Convert epoch milliseconds into an instant.
pub fn from_epoch_millis(millis: i64) -> SnapResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| SnapError::DataFormat {
        value: millis.to_string(),
        reason: "epoch milliseconds out of range".to_string(),
    })
}

/// Relative label for `instant` as seen at `now`, e.g. "3 days ago".
///
/// The distance is unsigned, so an instant ahead of `now` (sender clock
/// skew) still reads "... ago".
pub fn relative_label(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} ago", format_distance(instant, now))
}

/// Human-readable distance between two instants, independent of order.
pub fn format_distance(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later - earlier).num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }

    if minutes < 45 {
        return format!("{} minutes", minutes);
    }

    if minutes < 90 {
        return "about 1 hour".to_string();
    }

    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / MINUTES_IN_HOUR).round() as i64;
        return format!("about {}", plural(hours, "hour"));
    }

    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }

    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return plural(days, "day");
    }

    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return format!("about {}", plural(months, "month"));
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(nearest, "month");
    }

    let years = months / 12;
    let remainder = months % 12;
    if remainder < 3 {
        format!("about {}", plural(years, "year"))
    } else if remainder < 9 {
        format!("over {}", plural(years, "year"))
    } else {
        format!("almost {}", plural(years + 1, "year"))
    }
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12
        + (later.month() as i64 - earlier.month() as i64);

    let later_pos = (later.day(), later.num_seconds_from_midnight());
    let earlier_pos = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_pos < earlier_pos {
        months -= 1;
    }
    months
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        format_distance(now() - duration, now())
    }

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_timestamp("2023-05-01T12:00:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_timestamp("2023-05-01T14:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_export_format() {
        let ts = parse_timestamp("2023-05-01 12:00:00 UTC").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("last tuesday"),
            Err(SnapError::DataFormat { .. })
        ));
        assert!(matches!(
            parse_timestamp("2023-13-45 99:00:00 UTC"),
            Err(SnapError::DataFormat { .. })
        ));
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_epoch_millis() {
        let ts = from_epoch_millis(0).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
        assert!(from_epoch_millis(i64::MAX).is_err());
    }

    #[test]
    fn test_minutes_range() {
        assert_eq!(ago(Duration::seconds(10)), "less than a minute");
        assert_eq!(ago(Duration::seconds(60)), "1 minute");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes");
        assert_eq!(ago(Duration::minutes(44)), "44 minutes");
    }

    #[test]
    fn test_hours_range() {
        assert_eq!(ago(Duration::minutes(45)), "about 1 hour");
        assert_eq!(ago(Duration::minutes(89)), "about 1 hour");
        assert_eq!(ago(Duration::hours(2)), "about 2 hours");
        assert_eq!(ago(Duration::hours(23)), "about 23 hours");
    }

    #[test]
    fn test_days_range() {
        assert_eq!(ago(Duration::hours(24)), "1 day");
        assert_eq!(ago(Duration::hours(41)), "1 day");
        assert_eq!(ago(Duration::days(3)), "3 days");
        assert_eq!(ago(Duration::days(29)), "29 days");
    }

    #[test]
    fn test_months_range() {
        assert_eq!(ago(Duration::days(30)), "about 1 month");
        assert_eq!(ago(Duration::days(45)), "about 2 months");
        assert_eq!(ago(Duration::days(95)), "3 months");
    }

    #[test]
    fn test_years_range() {
        assert_eq!(ago(Duration::days(366)), "about 1 year");
        assert_eq!(ago(Duration::days(365 + 150)), "over 1 year");
        assert_eq!(ago(Duration::days(365 + 300)), "almost 2 years");
        assert_eq!(ago(Duration::days(3 * 365 + 10)), "about 3 years");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = now() - Duration::hours(5);
        assert_eq!(format_distance(a, now()), format_distance(now(), a));
    }

    #[test]
    fn test_relative_label_always_reads_ago() {
        assert_eq!(relative_label(now() - Duration::days(3), now()), "3 days ago");
        assert_eq!(relative_label(now() + Duration::days(3), now()), "3 days ago");
        assert_eq!(relative_label(now(), now()), "less than a minute ago");
    }
}
