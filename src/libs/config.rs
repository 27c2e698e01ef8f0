//! Configuration management for the todos application.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the per-user
//! application data directory. A missing file is not an error: the defaults
//! are used and the task database lives next to the configuration file.
//!
//! ## Store location
//!
//! The database file is resolved in this order:
//! 1. the `--db <PATH>` command-line flag,
//! 2. the `TODOS_DB` environment variable,
//! 3. `db_path` from `config.json`,
//! 4. `todos.db` inside the application data directory.
//!
//! ```rust,no_run
//! use todos::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.store_path(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the task database location.
pub const DB_ENV_VAR: &str = "TODOS_DB";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Explicit task database file. `None` means the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Whether deleting a task asks for confirmation first.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: None,
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration stored in `storage`, or defaults if there is none.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the task database location, honoring `TODOS_DB`.
    pub fn store_path(&self, cli_override: Option<PathBuf>) -> Result<PathBuf> {
        let from_env = env::var_os(DB_ENV_VAR).filter(|value| !value.is_empty()).map(PathBuf::from);
        self.resolve_store_path(cli_override, from_env, &DataStorage::new())
    }

    /// Picks the first of: CLI flag, environment, config file, default file in `storage`.
    pub fn resolve_store_path(&self, cli_override: Option<PathBuf>, from_env: Option<PathBuf>, storage: &DataStorage) -> Result<PathBuf> {
        if let Some(path) = cli_override.or(from_env).or_else(|| self.db_path.clone()) {
            return Ok(path);
        }
        Ok(storage.get_path(DB_FILE_NAME)?)
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let db_path: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDbPath.to_string())
            .with_initial_text(config.db_path.as_ref().map(|path| path.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let db_path = db_path.trim();
        config.db_path = if db_path.is_empty() { None } else { Some(PathBuf::from(db_path)) };

        config.confirm_delete = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptConfirmDelete.to_string())
            .default(config.confirm_delete)
            .interact()?;

        Ok(config)
    }

    /// Runs the wizard and persists the result.
    pub fn init_and_save() -> Result<()> {
        let config = Self::init()?;
        config.save()?;
        msg_success!(Message::ConfigSaved);
        Ok(())
    }
}
