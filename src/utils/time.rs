//! Time utilities: day boundaries, date arithmetic, range tests and minute spans.
//!
//! Everything works on local wall-clock values (`NaiveDate` / `NaiveDateTime`),
//! so a day is always exactly 24 hours long.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Midnight at the beginning of `date`.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Midnight at the beginning of the day containing `dt`.
pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    day_start(dt.date())
}

/// Shift a date by `n` days (negative values go backwards).
/// `None` when the result leaves the supported calendar range.
pub fn add_days(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    let days = Days::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// Monday of the ISO week containing `date`.
pub fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    let offset = date.weekday().num_days_from_monday() as i64;
    add_days(date, -offset)
}

/// True when `t` lies in `[start, end]`, both ends included.
pub fn is_between_inclusive(t: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    t >= start && t <= end
}

/// Whole minutes from `start` to `end`, rounded to the nearest minute.
/// Negative spans clamp to 0.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let secs = (end - start).num_seconds();
    if secs <= 0 {
        return 0;
    }
    (secs + 30) / 60
}

/// Format a minute count as `HH:MM`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
