//! Display implementation for taskboard messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between commands and the dashboard's notifications.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully".to_string(),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskCreateFailed(error) => format!("Failed to create task: {}", error),
            Message::TaskUpdateFailed(error) => format!("Failed to update task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Failed to delete task: {}", error),
            Message::InvalidTask(error) => format!("Task not saved: {}", error),
            Message::TaskModifyNotPermitted => "You can only modify your own tasks.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::ConfirmTaskUpdate => "Save changes?".to_string(),
            Message::TaskEditPreview => "Task after changes:".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),

            // === LIST MESSAGES ===
            Message::TasksHeader(ownership, completion) => format!("Tasks (owner: {}, status: {})", ownership, completion),
            Message::TasksShown(visible, total) => format!("{} of {} task(s) shown", visible, total),
            Message::NoTasksMine => "You have no tasks yet.".to_string(),
            Message::NoTasksAll => "No tasks registered.".to_string(),
            Message::NoTasksMatchFilter => "No tasks match the selected filter.".to_string(),
            Message::AllTasksRequireAdmin => "Listing every user's tasks requires admin rights; showing your own.".to_string(),
            Message::TasksLoadFailed(error) => format!("Could not load tasks: {}", error),
            Message::RetryHint => "Run the command again to retry.".to_string(),

            // === SESSION MESSAGES ===
            Message::Welcome(name) => format!("Welcome, {}", name),
            Message::Registered(name) => format!("Account created. Welcome, {}", name),
            Message::LoggedOut => "Logged out.".to_string(),
            Message::NotLoggedIn => "You are not logged in. Run `taskboard login` first.".to_string(),
            Message::SessionExpired => "Your session has expired. Please log in again.".to_string(),
            Message::LoginFailed(error) => format!("Login failed: {}", error),
            Message::RegisterFailed(error) => format!("Registration failed: {}", error),
            Message::CurrentUser { name, email, role } => format!("{} <{}> ({})", name, email, role),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleServer => "Task server settings".to_string(),

            // === PROMPTS ===
            Message::PromptServerApiUrl => "Enter the task API URL".to_string(),
            Message::PromptServerTimeout => "Enter request timeout (seconds)".to_string(),
            Message::PromptName => "Name".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptPasswordRepeat => "Repeat password".to_string(),
            Message::PasswordMismatch => "Passwords do not match".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskCompleted => "Completed?".to_string(),

            // === LABELS ===
            Message::LabelAccept => "Accept".to_string(),
            Message::LabelOk => "OK".to_string(),
            Message::LabelDelete => "Delete".to_string(),
            Message::LabelCancel => "Cancel".to_string(),

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
    fn password_confirmation_texts() {
        assert_eq!(Message::PromptPasswordRepeat.to_string(), "Repeat password");
        assert_eq!(Message::PasswordMismatch.to_string(), "Passwords do not match");
    }

    #[test]
    fn current_user_shows_role() {
        let text = Message::CurrentUser {
            name: "Root".to_string(),
            email: "root@example.com".to_string(),
            role: crate::libs::session::Role::Admin.to_string(),
        }
        .to_string();
        assert_eq!(text, "Root <root@example.com> (admin)");
    }
}
