use crate::{
    db::todos::Todos,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the tasks as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(todos: &Todos, args: ListArgs) -> Result<()> {
    let snapshot = todos.list_all()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if snapshot.is_empty() {
        msg_info!(Message::NoTodos);
        return Ok(());
    }

    msg_print!(Message::TodosHeader(snapshot.len()), true);
    View::todos(&snapshot);
    Ok(())
}
