use super::status::TaskStatus;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_datetime, parse_ymd, to_datetime_local, to_ymd};
use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_CHARS: usize = 120;

/// Hours used when a legacy record only carries calendar dates.
const LEGACY_START_HOUR: u32 = 9;
const LEGACY_SAME_DAY_END_HOUR: u32 = 10;
const LEGACY_END_HOUR: u32 = 17;

/// A validated, time-bounded task.
///
/// Instances are only built through [`normalize_task`] or after
/// [`validate_input`], so `end >= start` and the title is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: TaskStatus,
}

/// Shape of a task record in the JSON store. Every field is optional so
/// that hand-edited or legacy files still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Task {
    pub fn new(
        title: &str,
        description: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        status: TaskStatus,
    ) -> AppResult<Self> {
        validate_input(title, Some(start), Some(end))?;
        Ok(Self {
            id: generate_id(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            start,
            end,
            status,
        })
    }

    /// Persisted representation, including the derived date-only fields.
    pub fn to_raw(&self) -> RawTask {
        RawTask {
            id: Some(self.id.clone()),
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            start_datetime: Some(to_datetime_local(self.start)),
            end_datetime: Some(to_datetime_local(self.end)),
            start_date: Some(to_ymd(self.start.date())),
            end_date: Some(to_ymd(self.end.date())),
            status: Some(self.status.code().to_string()),
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Form-level validation shared by `add` and `edit`.
pub fn validate_input(
    title: &str,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> AppResult<()> {
    let title_len = title.trim().chars().count();
    if title_len < 1 || title_len > MAX_TITLE_CHARS {
        return Err(AppError::Validation(
            "Title is required and must be 1-120 characters.".into(),
        ));
    }
    let start = start
        .ok_or_else(|| AppError::Validation("Start date and time are required.".into()))?;
    let end =
        end.ok_or_else(|| AppError::Validation("End date and time are required.".into()))?;
    if end < start {
        return Err(AppError::Validation(
            "End date and time must be the same as or after start date and time.".into(),
        ));
    }
    Ok(())
}

/// Turn a stored record into a [`Task`], or `None` when it cannot be rendered.
///
/// Missing ids are generated, unknown statuses fall back to backlog and
/// date-only legacy records get default clock times.
pub fn normalize_task(raw: &RawTask) -> Option<Task> {
    let title = raw.title.as_deref().map(str::trim).unwrap_or_default();
    let description = raw.description.as_deref().map(str::trim).unwrap_or_default();
    let status = raw
        .status
        .as_deref()
        .and_then(TaskStatus::from_code)
        .unwrap_or_default();

    let start = coerce_legacy_start(raw);
    let end = coerce_legacy_end(raw, start);

    if title.is_empty() {
        return None;
    }
    let (start, end) = (start?, end?);
    if end < start {
        return None;
    }

    let id = match raw.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => generate_id(),
    };

    Some(Task {
        id,
        title: title.chars().take(MAX_TITLE_CHARS).collect(),
        description: description.to_string(),
        start,
        end,
        status,
    })
}

fn coerce_legacy_start(raw: &RawTask) -> Option<NaiveDateTime> {
    if let Some(dt) = raw.start_datetime.as_deref().and_then(parse_datetime) {
        return Some(dt);
    }
    let date = raw.start_date.as_deref().and_then(parse_ymd)?;
    Some(date.and_time(NaiveTime::from_hms_opt(LEGACY_START_HOUR, 0, 0)?))
}

fn coerce_legacy_end(raw: &RawTask, start: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
    if let Some(dt) = raw.end_datetime.as_deref().and_then(parse_datetime) {
        return Some(dt);
    }
    let date = raw.end_date.as_deref().and_then(parse_ymd)?;
    let hour = match start {
        Some(s) if s.date() == date => LEGACY_SAME_DAY_END_HOUR,
        _ => LEGACY_END_HOUR,
    };
    Some(date.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?))
}

/// `task_<base36 millis>_<6 random chars>`
pub fn generate_id() -> String {
    let millis = Local::now().timestamp_millis().max(0) as u64;
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("task_{}_{}", to_base36(millis), &random[..6])
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
