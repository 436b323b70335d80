use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::TaskLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Move a task to another board column.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { id, status } = cmd {
        let store = open_store(cfg);
        let mut tasks = store.load()?;

        if TaskLogic::set_status(&mut tasks, id, *status)? {
            store.save(&tasks)?;
            success(format!("Moved {} to {}", id, status.label()));
        } else {
            info(format!("{} is already in {}", id, status.label()));
        }
    }
    Ok(())
}
