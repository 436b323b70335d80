use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::build_board;
use crate::errors::AppResult;
use crate::models::task::Task;
use crate::ui::messages::header;
use crate::utils::colors::colorize_status;
use crate::utils::date::format_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { status } = cmd {
        let tasks = open_store(cfg).load()?;

        for column in build_board(&tasks) {
            if status.is_some_and(|s| s != column.status) {
                continue;
            }

            header(format!("{} ({})", column.status.label(), column.tasks.len()));
            if column.tasks.is_empty() {
                println!("  (empty)");
            }
            for task in column.tasks {
                print_card(task);
            }
            println!();
        }
    }
    Ok(())
}

fn print_card(task: &Task) {
    println!(
        "- {} [{}]",
        colorize_status(&task.title, task.status),
        task.id
    );
    println!(
        "    {} - {}",
        format_datetime(task.start),
        format_datetime(task.end)
    );
    if !task.description.is_empty() {
        println!("    {}", task.description);
    }
}
