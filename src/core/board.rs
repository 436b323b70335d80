//! Kanban projection of the task list.

use crate::models::status::TaskStatus;
use crate::models::task::Task;

pub struct BoardColumn<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// One column per status, tasks kept in store order.
pub fn build_board(tasks: &[Task]) -> Vec<BoardColumn<'_>> {
    TaskStatus::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            tasks: tasks.iter().filter(|t| t.status == status).collect(),
        })
        .collect()
}
