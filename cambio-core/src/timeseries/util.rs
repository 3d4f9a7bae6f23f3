//! Calendar-day parsing and timestamp helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an ISO-8601 date or date-time string down to its calendar day.
///
/// Accepts plain dates (`2024-01-31`), RFC 3339 timestamps with an
/// offset (the day is taken as written, in the stated offset), and naive
/// date-times. Returns `None` for anything else.
///
/// ```
/// use cambio_core::timeseries::util::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31);
/// assert_eq!(parse_calendar_date("2024-01-31"), jan31);
/// assert_eq!(parse_calendar_date("2024-01-31T23:00:00-03:00"), jan31);
/// assert_eq!(parse_calendar_date("31/01/2024"), None);
/// ```
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Milliseconds since the Unix epoch at the start of `day`.
#[must_use]
pub fn day_start_millis(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_supported_shapes() {
        assert_eq!(parse_calendar_date("2024-02-29"), Some(d(2024, 2, 29)));
        assert_eq!(parse_calendar_date(" 2024-02-29 "), Some(d(2024, 2, 29)));
        assert_eq!(parse_calendar_date("2024-02-29T00:00:00Z"), Some(d(2024, 2, 29)));
        assert_eq!(parse_calendar_date("2024-02-29T10:30:00.250"), Some(d(2024, 2, 29)));
        assert_eq!(parse_calendar_date("2024-02-29 10:30:00"), Some(d(2024, 2, 29)));
    }

    #[test]
    fn rejects_garbage_and_impossible_days() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date("2023-02-29"), None);
        assert_eq!(parse_calendar_date("2024-13-01"), None);
    }

    #[test]
    fn day_millis_are_one_day_apart() {
        let a = day_start_millis(d(2024, 1, 1));
        let b = day_start_millis(d(2024, 1, 2));
        assert_eq!(b - a, 86_400_000);
        assert_eq!(day_start_millis(d(1970, 1, 1)), 0);
    }
}
