//! Task persistence boundary.

pub mod json;

pub use json::JsonTaskStore;

use crate::errors::AppResult;
use crate::models::task::Task;

/// Anything that can hand the calendar a list of tasks, in any order.
pub trait TaskSource {
    fn get_tasks(&self) -> AppResult<Vec<Task>>;
}
