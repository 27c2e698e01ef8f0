use super::db::Db;
use super::error::{TodoError, TodoResult};
use crate::libs::todo::Todo;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA_TODOS: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed BOOLEAN DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const INSERT_TODO: &str = "INSERT INTO todos (title, completed, created_at) VALUES (?1, 0, ?2)";
const SELECT_TODOS: &str = "SELECT id, title, completed, created_at FROM todos ORDER BY created_at DESC, id DESC";
const SELECT_TODO_BY_ID: &str = "SELECT id, title, completed, created_at FROM todos WHERE id = ?1";
const TOGGLE_TODO: &str = "UPDATE todos SET completed = NOT completed WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";

/// Data-access object for the `todos` table.
///
/// Every operation opens its own connection and drops it before returning, so
/// each call is durable as soon as it returns.
#[derive(Debug, Clone)]
pub struct Todos {
    path: PathBuf,
}

impl Todos {
    /// Opens the store at `path`, creating the file and table on first use.
    pub fn open(path: impl AsRef<Path>) -> TodoResult<Todos> {
        let todos = Todos {
            path: path.as_ref().to_path_buf(),
        };
        todos.connect()?.execute(SCHEMA_TODOS, [])?;

        Ok(todos)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts a new, not yet completed task and returns its id.
    ///
    /// The title is stored trimmed; a blank title is rejected before anything
    /// touches the database.
    pub fn add(&self, title: &str) -> TodoResult<i64> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let conn = self.connect()?;
        conn.execute(INSERT_TODO, params![title, Utc::now().naive_utc()])?;
        let id = conn.last_insert_rowid();
        debug!(id, "added todo");

        Ok(id)
    }

    /// All tasks, newest first.
    pub fn list_all(&self) -> TodoResult<Vec<Todo>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_TODOS)?;
        let todo_iter = stmt.query_map([], map_todo)?;

        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }

        Ok(todos)
    }

    pub fn get(&self, id: i64) -> TodoResult<Option<Todo>> {
        let todo = self.connect()?.query_row(SELECT_TODO_BY_ID, params![id], map_todo).optional()?;

        Ok(todo)
    }

    /// Flips `completed`. Returns `false` if there is no task with `id`.
    pub fn toggle(&self, id: i64) -> TodoResult<bool> {
        let affected = self.connect()?.execute(TOGGLE_TODO, params![id])?;
        debug!(id, found = affected > 0, "toggled todo");

        Ok(affected > 0)
    }

    /// Removes the task permanently. Returns `false` if there is no task with `id`.
    pub fn delete(&self, id: i64) -> TodoResult<bool> {
        let affected = self.connect()?.execute(DELETE_TODO, params![id])?;
        debug!(id, found = affected > 0, "deleted todo");

        Ok(affected > 0)
    }

    fn connect(&self) -> TodoResult<Connection> {
        Ok(Db::open(&self.path)?.conn)
    }
}

fn map_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
    })
}
