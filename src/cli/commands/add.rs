use super::{open_store, parse_required_datetime};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::TaskLogic;
use crate::errors::AppResult;
use crate::models::task::Task;
use crate::ui::messages::success;
use log::info;

/// Add a task to the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        start,
        end,
        description,
        status,
    } = cmd
    {
        let start = parse_required_datetime(start)?;
        let end = parse_required_datetime(end)?;
        let task = Task::new(
            title,
            description.as_deref().unwrap_or_default(),
            start,
            end,
            *status,
        )?;

        let store = open_store(cfg);
        let mut tasks = store.load()?;
        let id = task.id.clone();
        let label = task.title.clone();
        TaskLogic::add(&mut tasks, task)?;
        store.save(&tasks)?;

        info!("task {id} added to {}", status.code());
        success(format!("Added \"{}\" to {} (id: {})", label, status.label(), id));
    }
    Ok(())
}
