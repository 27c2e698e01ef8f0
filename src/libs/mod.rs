//! Core library modules for the todos application.
//!
//! - **Infrastructure**: configuration, data storage location, logging, messages
//! - **Model**: the `Todo` record returned by the store
//! - **User interface**: table rendering for the task list
//!
//! ```rust,no_run
//! use todos::db::todos::Todos;
//!
//! let todos = Todos::open("todos.db")?;
//! let id = todos.add("Buy milk")?;
//! assert!(todos.toggle(id)?);
//! # Ok::<(), todos::db::error::TodoError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod todo;
pub mod view;
