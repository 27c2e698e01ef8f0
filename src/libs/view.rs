use super::todo::Todo;
use prettytable::{format, row, Table};

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo]) {
        Self::todos_table(todos).printstd();
    }

    pub fn todos_table(todos: &[Todo]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["DONE", "ID", "TITLE", "CREATED"]);
        for todo in todos {
            table.add_row(row![
                todo.marker(),
                todo.id,
                todo.title,
                todo.created_local().format(CREATED_AT_FORMAT)
            ]);
        }

        table
    }
}
