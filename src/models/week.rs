use crate::utils::time::{add_days, day_start, monday_of};
use chrono::{NaiveDate, NaiveDateTime};

pub const DAYS_PER_WEEK: usize = 7;

/// Seven consecutive calendar days shown side by side.
///
/// Only dates whose week fits in chrono's calendar range form a window, so
/// every day boundary is known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub days: [NaiveDate; DAYS_PER_WEEK],
    after_last: NaiveDate,
}

impl WeekWindow {
    /// Window whose first column is `first_day` (normally a Monday).
    pub fn new(first_day: NaiveDate) -> Option<Self> {
        let mut days = [first_day; DAYS_PER_WEEK];
        for (i, day) in days.iter_mut().enumerate() {
            *day = add_days(first_day, i as i64)?;
        }
        let after_last = add_days(first_day, DAYS_PER_WEEK as i64)?;
        Some(Self { days, after_last })
    }

    /// Monday-started week containing `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(monday_of(date)?)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    /// Midnight opening day `index`; `index == 7` is the exclusive week end.
    pub fn day_start(&self, index: usize) -> NaiveDateTime {
        if index == DAYS_PER_WEEK {
            day_start(self.after_last)
        } else {
            day_start(self.days[index])
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.day_start(0)
    }

    pub fn end_exclusive(&self) -> NaiveDateTime {
        self.day_start(DAYS_PER_WEEK)
    }

    pub fn previous(&self) -> Option<Self> {
        self.offset(-1)
    }

    pub fn next(&self) -> Option<Self> {
        self.offset(1)
    }

    /// Shift by `weeks` whole weeks; `None` past the calendar range.
    pub fn offset(&self, weeks: i64) -> Option<Self> {
        let days = weeks.checked_mul(DAYS_PER_WEEK as i64)?;
        Self::new(add_days(self.first_day(), days)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn days_are_consecutive() {
        let w = WeekWindow::new(d("2024-02-26")).unwrap();
        for pair in w.days.windows(2) {
            assert_eq!(add_days(pair[0], 1), Some(pair[1]));
        }
        assert_eq!(w.last_day(), d("2024-03-03"));
    }

    #[test]
    fn containing_starts_on_monday() {
        let w = WeekWindow::containing(d("2024-01-04")).unwrap();
        assert_eq!(w.first_day(), d("2024-01-01"));
        assert_eq!(w.end_exclusive(), day_start(d("2024-01-08")));
    }

    #[test]
    fn navigation_moves_whole_weeks() {
        let w = WeekWindow::containing(d("2024-01-04")).unwrap();
        assert_eq!(w.next().unwrap().first_day(), d("2024-01-08"));
        assert_eq!(w.previous().unwrap().first_day(), d("2023-12-25"));
        assert_eq!(w.offset(-2), w.previous().and_then(|p| p.previous()));
    }

    #[test]
    fn offset_outside_calendar_range_is_none() {
        let w = WeekWindow::containing(d("2024-01-04")).unwrap();
        assert_eq!(w.offset(100_000_000), None);
        assert_eq!(w.offset(i64::MIN), None);
        assert_eq!(WeekWindow::new(NaiveDate::MAX), None);
        assert_eq!(WeekWindow::containing(NaiveDate::MIN), None);
    }
}
