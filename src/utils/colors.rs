//! ANSI color helper utilities for terminal output.
use crate::models::status::TaskStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Backlog → grey, in progress → yellow, done → green.
pub fn color_for_status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Backlog => GREY,
        TaskStatus::InProgress => YELLOW,
        TaskStatus::Done => GREEN,
    }
}

/// Wrap `s` in the color of `status`.
pub fn colorize_status(s: &str, status: TaskStatus) -> String {
    format!("{}{}{}", color_for_status(status), s, RESET)
}
