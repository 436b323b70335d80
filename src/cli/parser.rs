use crate::export::ExportFormat;
use crate::models::status::TaskStatus;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTaskWeek
#[derive(Parser)]
#[command(
    name = "rtaskweek",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan time-bounded tasks on a kanban board and lay them out on a weekly calendar",
    long_about = None
)]
pub struct Cli {
    /// Override the task store path (useful for tests or a second board)
    #[arg(global = true, long = "tasks")]
    pub tasks: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the task store
    Init {
        /// JSON array of tasks imported when the store is created
        #[arg(long, value_name = "FILE")]
        seed: Option<String>,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a task to the backlog (or another column)
    Add {
        /// Task title (1-120 characters)
        title: String,

        /// Start (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: String,

        /// End (YYYY-MM-DDTHH:MM), not before start
        #[arg(long)]
        end: String,

        /// Free-form details
        #[arg(long = "desc")]
        description: Option<String>,

        /// Initial column
        #[arg(long, value_enum, default_value = "backlog")]
        status: TaskStatus,
    },

    /// Edit title, description or time range of a task
    Edit {
        /// Task id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "desc")]
        description: Option<String>,

        /// New start (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: Option<String>,

        /// New end (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: Option<String>,
    },

    /// Delete a task
    Del {
        /// Task id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move a task to another board column
    Move {
        /// Task id
        id: String,

        /// Target column: backlog, in_progress, done
        #[arg(value_enum)]
        status: TaskStatus,
    },

    /// Show the kanban board
    List {
        /// Show a single column
        #[arg(long, value_enum)]
        status: Option<TaskStatus>,
    },

    /// Show the weekly calendar
    Week {
        /// Any day of the week to show (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Shift by whole weeks (e.g. -1 for the previous week)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Show descriptions and block geometry
        #[arg(long)]
        details: bool,
    },

    /// Export the computed weekly layout
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Any day of the week to export (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Shift by whole weeks
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Clear the task store and re-seed it
    Reset {
        /// Seed file; defaults to `seed_file` from the configuration
        #[arg(long, value_name = "FILE")]
        seed: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
