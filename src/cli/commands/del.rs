use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::TaskLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

/// Delete a task, asking for confirmation unless `--yes`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = open_store(cfg);
        let mut tasks = store.load()?;
        let title = TaskLogic::find(&tasks, id)?.title.clone();

        if !*yes && !confirm(&format!("Delete task \"{}\"?", title))? {
            info("Deletion cancelled.");
            return Ok(());
        }

        TaskLogic::delete(&mut tasks, id)?;
        store.save(&tasks)?;
        success(format!("Deleted \"{}\"", title));
    }
    Ok(())
}
