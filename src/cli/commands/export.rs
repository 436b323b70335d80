use super::{open_store, resolve_week};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::render_week;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        offset,
        force,
    } = cmd
    {
        let window = resolve_week(date.as_ref(), *offset)?;
        let tasks = open_store(cfg).load()?;
        let metrics = cfg.grid_metrics();
        let layout = render_week(&window, &tasks, &metrics);

        ExportLogic::export(&layout, &metrics, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
