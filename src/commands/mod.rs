pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod shell;
pub mod toggle;

use crate::db::todos::Todos;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(flatten)]
    Store(StoreCommand),
}

/// Commands that work on the task database.
#[derive(Debug, Subcommand)]
enum StoreCommand {
    #[command(about = "Open the interactive task list (default)")]
    Shell,
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Show all tasks, newest first")]
    List(list::ListArgs),
    #[command(about = "Mark a task as done or not done")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task database file, overriding TODOS_DB and the configuration
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        match self.command.unwrap_or(Commands::Store(StoreCommand::Shell)) {
            Commands::Init => init::cmd(),
            Commands::Store(command) => command.run(self.db),
        }
    }
}

impl StoreCommand {
    fn run(self, db: Option<PathBuf>) -> Result<()> {
        let config = Config::read()?;
        let todos = Todos::open(config.store_path(db)?)?;
        msg_debug!(Message::StoreLocation(todos.path().display().to_string()));

        match self {
            StoreCommand::Shell => shell::cmd(&todos, &config),
            StoreCommand::Add(args) => add::cmd(&todos, args),
            StoreCommand::List(args) => list::cmd(&todos, args),
            StoreCommand::Toggle(args) => toggle::cmd(&todos, args),
            StoreCommand::Delete(args) => delete::cmd(&todos, &config, args),
        }
    }
}
