use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "todo",
    version = VERSION,
    about = "To-do list grouped by due date",
    after_help = "\
NOTE:
  Tasks are stored in a single JSON file, by default <data-dir>/todolist/data.json.
  Override with --file or TODO_FILE. Set RUST_LOG=debug for diagnostics on stderr.

EXIT CODES:
  0  Success (including commands that name a missing task: nothing changes)
  1  Error (validation)

TOGGLE:
  The first toggle marks a task completed. Toggling a completed task deletes it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path of the data file
    #[arg(long, global = true, env = "TODO_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data file if it does not exist
    Init,

    /// Show tasks grouped by due date
    #[command(alias = "ls")]
    List,

    #[command(flatten)]
    Task(TaskCommands),
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task name
        name: String,
        /// Due date (defaults to today, UTC)
        #[arg(long, value_name = "YYYY-MM-DD")]
        due: Option<String>,
    },
    /// Change a task's name
    Rename {
        id: u64,
        /// New name
        name: String,
    },
    /// Complete a task, or delete it if already completed
    Toggle {
        id: u64,
    },
    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        id: u64,
    },
}
