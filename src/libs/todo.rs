use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

/// A single to-do entry as stored in the `todos` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Creation time in UTC, matching the column's `CURRENT_TIMESTAMP` default.
    pub created_at: NaiveDateTime,
}

impl Todo {
    /// Checkbox marker used in tables and selection lists.
    pub fn marker(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// Creation time converted to the local time zone for display.
    pub fn created_local(&self) -> DateTime<Local> {
        Utc.from_utc_datetime(&self.created_at).with_timezone(&Local)
    }

    /// One-line label, e.g. `[x] #3 Buy milk`.
    pub fn label(&self) -> String {
        format!("{} #{} {}", self.marker(), self.id, self.title)
    }
}
