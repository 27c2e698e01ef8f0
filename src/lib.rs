//! # Todos
//!
//! A single-user to-do list backed by a local SQLite database.
//!
//! ## Features
//!
//! - **Task Store**: add, list (newest first), toggle completion, delete
//! - **Interactive Shell**: re-renders the whole list after every change
//! - **One-shot Commands**: `add`, `list`, `toggle`, `delete` for scripting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todos::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
