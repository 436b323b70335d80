use super::{open_store, parse_optional_datetime};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::{TaskLogic, TaskPatch};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::format_datetime;

/// Edit an existing task; unspecified fields keep their value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        description,
        start,
        end,
    } = cmd
    {
        let patch = TaskPatch {
            title: title.clone(),
            description: description.clone(),
            start: parse_optional_datetime(start.as_ref())?,
            end: parse_optional_datetime(end.as_ref())?,
        };

        let store = open_store(cfg);
        let mut tasks = store.load()?;
        let updated = TaskLogic::update(&mut tasks, id, patch)?;
        store.save(&tasks)?;

        success(format!(
            "Updated \"{}\": {} - {}",
            updated.title,
            format_datetime(updated.start),
            format_datetime(updated.end)
        ));
    }
    Ok(())
}
