use crate::{
    db::{error::TodoError, todos::Todos},
    libs::messages::Message,
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; several words are joined with spaces
    #[arg(required = true)]
    title: Vec<String>,
}

pub fn cmd(todos: &Todos, args: AddArgs) -> Result<()> {
    let title = args.title.join(" ");

    match todos.add(&title) {
        Ok(id) => {
            msg_success!(Message::TodoAdded(id, title.trim().to_string()));
            Ok(())
        }
        Err(TodoError::EmptyTitle) => msg_bail_anyhow!(Message::TitleRequired),
        Err(e) => Err(e.into()),
    }
}
