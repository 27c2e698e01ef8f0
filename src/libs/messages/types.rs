/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites only
/// pick a variant and supply its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoAdded(i64, String), // id, title
    TodoCompleted(String),  // title
    TodoReopened(String),   // title
    TodoDeleted(String),    // title
    TodoNotFound(i64),      // id
    TodoToggleFailed,
    TodoDeleteFailed,
    TitleRequired,
    NoTodos,
    TodosHeader(usize), // count
    ConfirmDeleteTodo(String), // title

    // === SHELL MESSAGES ===
    SelectAction,
    SelectTodoToToggle,
    SelectTodoToDelete,
    ShellActionAdd,
    ShellActionToggle,
    ShellActionDelete,
    ShellActionRefresh,
    ShellActionQuit,
    ShellGoodbye,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    StoreLocation(String), // path

    // === PROMPTS ===
    PromptTodoTitle,
    PromptDbPath,
    PromptConfirmDelete,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
