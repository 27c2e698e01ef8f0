//! Database layer for the todos application.
//!
//! A single SQLite table holds every task. The store opens a fresh connection
//! per operation; there is no pooling and no caching between calls.
//!
//! ```rust,no_run
//! use todos::db::todos::Todos;
//!
//! let todos = Todos::open("todos.db")?;
//! let id = todos.add("Buy milk")?;
//! for todo in todos.list_all()? {
//!     println!("{}", todo.label());
//! }
//! todos.delete(id)?;
//! # Ok::<(), todos::db::error::TodoError>(())
//! ```

/// Connection opening.
pub mod db;

/// Store error type.
pub mod error;

/// Task CRUD operations.
pub mod todos;
