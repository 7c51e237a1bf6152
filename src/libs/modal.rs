//! Confirmation workflow.
//!
//! A two-state machine (`Hidden` / `Visible`) that gates destructive actions
//! behind an explicit confirm step and carries result notifications. There is
//! no queue: opening a prompt while another is visible replaces it.
//!
//! The action bound to a prompt is a plain value ([`ConfirmAction`]). Calling
//! [`Modal::confirm`] hides the prompt and hands the action back; the owner
//! performs it and may open a new prompt with the outcome.

use super::messages::Message;
use super::task::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Info,
    Success,
    Error,
}

/// What happens when the user confirms a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Acknowledge and close.
    Dismiss,
    DeleteTask(TaskId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub message: Message,
    pub kind: ModalKind,
    pub action: ConfirmAction,
    pub confirm_label: String,
    pub show_cancel: bool,
}

impl Prompt {
    /// A question that runs `action` on confirm and offers a cancel option.
    pub fn confirm(message: Message, action: ConfirmAction) -> Self {
        Self {
            message,
            kind: ModalKind::Info,
            action,
            confirm_label: Message::LabelAccept.to_string(),
            show_cancel: true,
        }
    }

    /// A notification acknowledged with a single button.
    pub fn notice(kind: ModalKind, message: Message) -> Self {
        Self {
            message,
            kind,
            action: ConfirmAction::Dismiss,
            confirm_label: Message::LabelOk.to_string(),
            show_cancel: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    #[default]
    Hidden,
    Visible(Prompt),
}

impl Modal {
    pub fn new() -> Self {
        Modal::Hidden
    }

    /// Shows `prompt`, returning the prompt it replaced if one was visible.
    pub fn open(&mut self, prompt: Prompt) -> Option<Prompt> {
        tracing::debug!(kind = ?prompt.kind, action = ?prompt.action, "modal opened");
        match std::mem::replace(self, Modal::Visible(prompt)) {
            Modal::Visible(previous) => Some(previous),
            Modal::Hidden => None,
        }
    }

    /// Close affordance; always available.
    pub fn close(&mut self) {
        *self = Modal::Hidden;
    }

    /// Hides the visible prompt and yields its action. `None` when hidden.
    pub fn confirm(&mut self) -> Option<ConfirmAction> {
        match std::mem::take(self) {
            Modal::Visible(prompt) => Some(prompt.action),
            Modal::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Modal::Visible(_))
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        match self {
            Modal::Visible(prompt) => Some(prompt),
            Modal::Hidden => None,
        }
    }
}
