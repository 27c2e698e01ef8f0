//! Display implementation for todos application messages.
//!
//! All message text is defined here, in one `match`, so the wording of the
//! interactive shell and the one-shot commands stays consistent.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoAdded(id, title) => format!("Added task #{}: {}", id, title),
            Message::TodoCompleted(title) => format!("Marked as done: {}", title),
            Message::TodoReopened(title) => format!("Marked as not done: {}", title),
            Message::TodoDeleted(title) => format!("Deleted task: {}", title),
            Message::TodoNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TodoToggleFailed => "Failed to update the task status.".to_string(),
            Message::TodoDeleteFailed => "Failed to delete the task.".to_string(),
            Message::TitleRequired => "Please enter a task.".to_string(),
            Message::NoTodos => "No tasks yet.".to_string(),
            Message::TodosHeader(count) => format!("Tasks ({})", count),
            Message::ConfirmDeleteTodo(title) => format!("Delete '{}'? Are you sure?", title),

            // === SHELL MESSAGES ===
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::SelectTodoToToggle => "Select a task to mark done / not done".to_string(),
            Message::SelectTodoToDelete => "Select a task to delete".to_string(),
            Message::ShellActionAdd => "Add task".to_string(),
            Message::ShellActionToggle => "Toggle task".to_string(),
            Message::ShellActionDelete => "Delete task".to_string(),
            Message::ShellActionRefresh => "Refresh".to_string(),
            Message::ShellActionQuit => "Quit".to_string(),
            Message::ShellGoodbye => "Bye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::StoreLocation(path) => format!("Using task database at {}", path),

            // === PROMPTS ===
            Message::PromptTodoTitle => "New task".to_string(),
            Message::PromptDbPath => "Task database file (leave empty for the default location)".to_string(),
            Message::PromptConfirmDelete => "Ask for confirmation before deleting a task?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_messages() {
        assert_eq!(Message::TodoAdded(3, "Buy milk".into()).to_string(), "Added task #3: Buy milk");
        assert_eq!(Message::TodoNotFound(42).to_string(), "Task with ID 42 not found.");
        assert_eq!(Message::TodosHeader(2).to_string(), "Tasks (2)");
    }

    #[test]
    fn test_failure_messages_are_generic() {
        assert!(!Message::TodoToggleFailed.to_string().contains('#'));
        assert!(!Message::TodoDeleteFailed.to_string().contains('#'));
    }
}
