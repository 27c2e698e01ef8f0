//! Interactive task list.
//!
//! The shell keeps no task state between iterations: every pass of the loop
//! fetches a fresh snapshot from the store, renders it, and offers the actions.
//! Selections index into that snapshot and only forward ids the store returned.

use crate::{
    db::{error::TodoError, todos::Todos},
    libs::{config::Config, messages::Message, todo::Todo, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Add,
    Toggle,
    Delete,
    Refresh,
    Quit,
}

impl ShellAction {
    pub const ALL: [ShellAction; 5] = [
        ShellAction::Add,
        ShellAction::Toggle,
        ShellAction::Delete,
        ShellAction::Refresh,
        ShellAction::Quit,
    ];

    pub fn message(self) -> Message {
        match self {
            ShellAction::Add => Message::ShellActionAdd,
            ShellAction::Toggle => Message::ShellActionToggle,
            ShellAction::Delete => Message::ShellActionDelete,
            ShellAction::Refresh => Message::ShellActionRefresh,
            ShellAction::Quit => Message::ShellActionQuit,
        }
    }
}

pub struct Shell<'a> {
    todos: &'a Todos,
    config: &'a Config,
    theme: ColorfulTheme,
}

impl<'a> Shell<'a> {
    pub fn new(todos: &'a Todos, config: &'a Config) -> Self {
        Self {
            todos,
            config,
            theme: ColorfulTheme::default(),
        }
    }

    pub fn run(&self) -> Result<()> {
        let labels: Vec<String> = ShellAction::ALL.iter().map(|action| action.message().to_string()).collect();

        loop {
            let snapshot = self.render()?;

            let selection = Select::with_theme(&self.theme)
                .with_prompt(Message::SelectAction.to_string())
                .items(&labels)
                .default(0)
                .interact()?;

            match ShellAction::ALL[selection] {
                ShellAction::Add => {
                    let input: String = Input::with_theme(&self.theme)
                        .with_prompt(Message::PromptTodoTitle.to_string())
                        .allow_empty(true)
                        .interact_text()?;
                    self.add(&input)?;
                }
                ShellAction::Toggle => {
                    if let Some(todo) = self.pick(&snapshot, Message::SelectTodoToToggle)? {
                        self.toggle(todo)?;
                    }
                }
                ShellAction::Delete => {
                    if let Some(todo) = self.pick(&snapshot, Message::SelectTodoToDelete)? {
                        if self.confirm_delete(todo)? {
                            self.delete(todo)?;
                        } else {
                            msg_info!(Message::OperationCancelled);
                        }
                    }
                }
                ShellAction::Refresh => {}
                ShellAction::Quit => {
                    msg_print!(Message::ShellGoodbye);
                    return Ok(());
                }
            }
        }
    }

    /// Fetches and prints the current list, returning the snapshot it rendered.
    pub fn render(&self) -> Result<Vec<Todo>> {
        let snapshot = self.todos.list_all()?;

        if snapshot.is_empty() {
            msg_info!(Message::NoTodos);
        } else {
            msg_print!(Message::TodosHeader(snapshot.len()), true);
            View::todos(&snapshot);
        }

        Ok(snapshot)
    }

    /// Adds a task from raw input. A blank title is reported as a warning and
    /// yields `None`.
    pub fn add(&self, input: &str) -> Result<Option<i64>> {
        match self.todos.add(input) {
            Ok(id) => {
                msg_success!(Message::TodoAdded(id, input.trim().to_string()));
                Ok(Some(id))
            }
            Err(TodoError::EmptyTitle) => {
                msg_warning!(Message::TitleRequired);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn toggle(&self, todo: &Todo) -> Result<bool> {
        if !self.todos.toggle(todo.id)? {
            msg_error!(Message::TodoToggleFailed);
            return Ok(false);
        }

        if todo.completed {
            msg_success!(Message::TodoReopened(todo.title.clone()));
        } else {
            msg_success!(Message::TodoCompleted(todo.title.clone()));
        }
        Ok(true)
    }

    pub fn delete(&self, todo: &Todo) -> Result<bool> {
        if !self.todos.delete(todo.id)? {
            msg_error!(Message::TodoDeleteFailed);
            return Ok(false);
        }

        msg_success!(Message::TodoDeleted(todo.title.clone()));
        Ok(true)
    }

    fn confirm_delete(&self, todo: &Todo) -> Result<bool> {
        if !self.config.confirm_delete {
            return Ok(true);
        }

        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(Message::ConfirmDeleteTodo(todo.title.clone()).to_string())
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    fn pick<'s>(&self, snapshot: &'s [Todo], prompt: Message) -> Result<Option<&'s Todo>> {
        if snapshot.is_empty() {
            msg_info!(Message::NoTodos);
            return Ok(None);
        }

        let items: Vec<String> = snapshot.iter().map(Todo::label).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt.to_string())
            .items(&items)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|index| &snapshot[index]))
    }
}

pub fn cmd(todos: &Todos, config: &Config) -> Result<()> {
    Shell::new(todos, config).run()
}
