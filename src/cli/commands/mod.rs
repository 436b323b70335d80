pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod move_task;
pub mod reset;
pub mod week;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::JsonTaskStore;
use crate::utils::date::{parse_datetime, parse_ymd, to_ymd, today};
use crate::utils::path::expand_tilde;
use crate::models::week::WeekWindow;
use chrono::NaiveDateTime;

/// Store configured in `cfg` (already carrying any `--tasks` override).
pub(crate) fn open_store(cfg: &Config) -> JsonTaskStore {
    JsonTaskStore::new(expand_tilde(&cfg.tasks_file))
}

pub(crate) fn parse_required_datetime(s: &str) -> AppResult<NaiveDateTime> {
    parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

pub(crate) fn parse_optional_datetime(s: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    s.map(|v| parse_required_datetime(v)).transpose()
}

/// Monday-started week containing `date` (default today), shifted by `offset` weeks.
pub(crate) fn resolve_week(date: Option<&String>, offset: i64) -> AppResult<WeekWindow> {
    let anchor = match date {
        Some(d) => parse_ymd(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
        None => today(),
    };
    WeekWindow::containing(anchor)
        .and_then(|week| week.offset(offset))
        .ok_or_else(|| {
            AppError::WeekOutOfRange(format!("{} shifted by {offset} weeks", to_ymd(anchor)))
        })
}
