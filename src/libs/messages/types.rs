#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskNotFoundWithId(String),
    TaskCreateFailed(String), // error
    TaskUpdateFailed(String), // error
    TaskDeleteFailed(String), // error
    InvalidTask(String),      // validation error
    TaskModifyNotPermitted,
    ConfirmDeleteTask(String), // title
    ConfirmTaskUpdate,
    TaskEditPreview,
    EditingTask(String), // title
    NoChangesDetected,

    // === LIST MESSAGES ===
    TasksHeader(String, String), // ownership, completion
    TasksShown(usize, usize),    // visible, total
    NoTasksMine,
    NoTasksAll,
    NoTasksMatchFilter,
    AllTasksRequireAdmin,
    TasksLoadFailed(String), // error
    RetryHint,

    // === SESSION MESSAGES ===
    Welcome(String), // user name
    Registered(String),
    LoggedOut,
    NotLoggedIn,
    SessionExpired,
    LoginFailed(String),    // error
    RegisterFailed(String), // error
    CurrentUser { name: String, email: String, role: String },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleServer,

    // === PROMPTS ===
    PromptServerApiUrl,
    PromptServerTimeout,
    PromptName,
    PromptEmail,
    PromptPassword,
    PromptPasswordRepeat,
    PasswordMismatch,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCompleted,

    // === LABELS ===
    LabelAccept,
    LabelOk,
    LabelDelete,
    LabelCancel,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
