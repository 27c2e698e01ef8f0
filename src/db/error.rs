use thiserror::Error;

/// Errors raised by the task store.
///
/// A missing id is not an error: `toggle` and `delete` report it through
/// their boolean result.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TodoResult<T> = Result<T, TodoError>;
