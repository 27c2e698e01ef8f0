use super::error::TodoResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DB_FILE_NAME: &str = "todos.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens a connection to the database at `path`, creating its parent directory.
    pub fn open(path: &Path) -> TodoResult<Db> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database connection");

        Ok(Db { conn })
    }
}
