use crate::{db::todos::Todos, libs::messages::Message, msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID as shown by `todos list`
    id: i64,
}

pub fn cmd(todos: &Todos, args: ToggleArgs) -> Result<()> {
    if !todos.toggle(args.id)? {
        msg_bail_anyhow!(Message::TodoToggleFailed);
    }

    if let Some(todo) = todos.get(args.id)? {
        if todo.completed {
            msg_success!(Message::TodoCompleted(todo.title));
        } else {
            msg_success!(Message::TodoReopened(todo.title));
        }
    }
    Ok(())
}
