use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;

/// Clear the store and import the seed file again.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { seed, yes } = cmd {
        if !*yes && !confirm("Clear local tasks and re-seed?")? {
            info("Reset cancelled.");
            return Ok(());
        }

        let seed_path = seed
            .as_ref()
            .or(cfg.seed_file.as_ref())
            .map(|s| expand_tilde(s));
        let tasks = open_store(cfg).reset_to_seed(seed_path.as_deref())?;
        success(format!("Task store reset ({} tasks)", tasks.len()));
    }
    Ok(())
}
