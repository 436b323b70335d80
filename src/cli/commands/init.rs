use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::JsonTaskStore;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the task store, imported from `--seed` when it does not exist yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let seed = match &cli.command {
        Commands::Init { seed } => seed.clone(),
        _ => None,
    };

    let mut cfg = Config::init_all(cli.tasks.clone(), cli.test)?;
    if seed.is_some() && !cli.test {
        cfg.seed_file = seed.clone();
        cfg.save()?;
    }

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Task store  : {}", cfg.tasks_file));

    let store = JsonTaskStore::new(expand_tilde(&cfg.tasks_file));
    let seed_path = seed.as_deref().map(expand_tilde);
    let tasks = store.seed_from_file_if_empty(seed_path.as_deref())?;

    success(format!(
        "Task store ready at {} ({} tasks)",
        store.path().display(),
        tasks.len()
    ));
    Ok(())
}
