//! Parsing and formatting of `date_posted` values.
//!
//! The data file carries ISO-ish strings: full RFC 3339 timestamps, Python's
//! `str(datetime)` form (space separator, optional offset), or bare dates.
//! Values without an offset are read as local time; bare dates as local midnight.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z"];
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a posting date. Returns `None` for anything unrecognised.
pub fn parse_posted(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Local));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local_from_naive(naive);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(local_from_naive)
}

fn local_from_naive(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    resolve_wall_time(&Local, naive)
}

/// Maps a wall-clock time to an instant in `tz`.
///
/// A time in a DST fold resolves to the earlier instant. A time inside a
/// spring-forward gap is read with the offset in force before the gap, which
/// moves it forward by the gap's length (02:30 becomes 03:30).
fn resolve_wall_time<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let before = tz.from_local_datetime(&(naive - Duration::days(1))).earliest()?;
            let offset_secs = i64::from(before.offset().fix().local_minus_utc());
            Some(tz.from_utc_datetime(&(naive - Duration::seconds(offset_secs))))
        }
    }
}

/// Whole days elapsed from `posted` to `now`, floored. Negative for future dates.
pub fn days_since(posted: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (now - posted).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// True when `posted` falls at or after local midnight of `now`'s day.
pub fn is_on_or_after_today(posted: DateTime<Local>, now: DateTime<Local>) -> bool {
    posted.date_naive() >= now.date_naive()
}

/// "January 5, 2025"
pub fn format_long(date: DateTime<Local>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Jan 5, 2025"
pub fn format_short(date: DateTime<Local>) -> String {
    date.format("%b %-d, %Y").to_string()
}
