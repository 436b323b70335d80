//! Date parsing and formatting for the wall-clock strings stored in the task file.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static YMD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static YMD_HM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})T(\d{2}):(\d{2})$").expect("valid date-time regex")
});

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a strict `YYYY-MM-DD` string. Impossible dates (e.g. `2024-02-30`) are rejected.
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    if !YMD_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse either `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM`.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if YMD_RE.is_match(s) {
        return parse_ymd(s).map(|d| d.and_time(NaiveTime::MIN));
    }

    let caps = YMD_HM_RE.captures(s)?;
    let date = parse_ymd(&caps[1])?;
    let hours: u32 = caps[2].parse().ok()?;
    let minutes: u32 = caps[3].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hours, minutes, 0).map(|t| date.and_time(t))
}

pub fn to_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn to_datetime_local(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// `Jan 1, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 1, 2024, 9:00 AM`
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Short weekday name (`Mon`, `Tue`, ...).
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
