//! rTaskWeek library root.
//! Exposes the weekly calendar layout engine, the task store, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

pub use crate::core::calendar::{
    DayLayout, Geometry, GridMetrics, PlacedSegment, Segment, WeekLayout, build_segments,
    layout_columns, render_week, to_geometry,
};
pub use models::{Task, TaskStatus, WeekWindow};
pub use store::{JsonTaskStore, TaskSource};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Move { .. } => cli::commands::move_task::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed to every handler
    let mut cfg = Config::load()?;
    if let Some(custom_tasks) = &cli.tasks {
        cfg.tasks_file = custom_tasks.clone();
    }

    logging::init_logging(&cfg.log_level)?;

    dispatch(&cli, &cfg)
}
