//! Board operations on an in-memory task list: add, edit, delete, move.
//!
//! Handlers load the list from the store, apply one of these and save it back.

use crate::errors::{AppError, AppResult};
use crate::models::status::TaskStatus;
use crate::models::task::{Task, validate_input};
use chrono::NaiveDateTime;

/// Fields changed by `edit`; `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

pub struct TaskLogic;

impl TaskLogic {
    pub fn find<'a>(tasks: &'a [Task], id: &str) -> AppResult<&'a Task> {
        tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))
    }

    pub fn add(tasks: &mut Vec<Task>, task: Task) -> AppResult<()> {
        if tasks.iter().any(|t| t.id == task.id) {
            return Err(AppError::Other(format!("duplicate task id {}", task.id)));
        }
        tasks.push(task);
        Ok(())
    }

    /// Apply `patch` after validating the merged record.
    pub fn update(tasks: &mut [Task], id: &str, patch: TaskPatch) -> AppResult<Task> {
        let task = find_mut(tasks, id)?;

        let title = patch.title.unwrap_or_else(|| task.title.clone());
        let start = patch.start.unwrap_or(task.start);
        let end = patch.end.unwrap_or(task.end);
        validate_input(&title, Some(start), Some(end))?;

        task.title = title.trim().to_string();
        if let Some(desc) = patch.description {
            task.description = desc.trim().to_string();
        }
        task.start = start;
        task.end = end;
        Ok(task.clone())
    }

    pub fn delete(tasks: &mut Vec<Task>, id: &str) -> AppResult<Task> {
        let idx = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;
        Ok(tasks.remove(idx))
    }

    /// Returns `false` when the task already had `status`.
    pub fn set_status(tasks: &mut [Task], id: &str, status: TaskStatus) -> AppResult<bool> {
        let task = find_mut(tasks, id)?;
        if task.status == status {
            return Ok(false);
        }
        task.status = status;
        Ok(true)
    }
}

fn find_mut<'a>(tasks: &'a mut [Task], id: &str) -> AppResult<&'a mut Task> {
    tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| AppError::TaskNotFound(id.to_string()))
}
