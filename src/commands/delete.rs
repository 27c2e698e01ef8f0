use crate::{
    db::todos::Todos,
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID as shown by `todos list`
    id: i64,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(todos: &Todos, config: &Config, args: DeleteArgs) -> Result<()> {
    let todo = match todos.get(args.id)? {
        Some(todo) => todo,
        None => msg_bail_anyhow!(Message::TodoNotFound(args.id)),
    };

    if config.confirm_delete && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTodo(todo.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if !todos.delete(todo.id)? {
        msg_bail_anyhow!(Message::TodoDeleteFailed);
    }
    msg_success!(Message::TodoDeleted(todo.title));
    Ok(())
}
