//! Dashboard: everything one signed-in viewer works with.
//!
//! Owns the [`TaskStore`], the [`FilterState`], the [`TaskEditor`] and the
//! confirmation [`Modal`], and wires them together:
//!
//! - changing the ownership filter changes the fetch scope and reloads;
//! - submitting the editor creates or updates, and reports through the modal;
//! - deleting goes through two modal presentations, "confirm?" then "result".
//!
//! Failed mutations never clear the editor, so nothing typed is lost.

use super::editor::{Submission, TaskEditor};
use super::filter::{CompletionFilter, FilterState, OwnershipFilter};
use super::messages::Message;
use super::modal::{ConfirmAction, Modal, ModalKind, Prompt};
use super::session::User;
use super::store::TaskStore;
use super::task::{Task, TaskId};
use crate::api::{TaskBackend, TaskScope};

/// State of the task screen for one signed-in viewer.
pub struct Dashboard<B> {
    viewer: User,
    store: TaskStore<B>,
    filters: FilterState,
    editor: TaskEditor,
    modal: Modal,
}

fn scope_for(filters: &FilterState) -> TaskScope {
    match filters.ownership() {
        OwnershipFilter::All => TaskScope::All,
        OwnershipFilter::Mine => TaskScope::Mine,
    }
}

impl<B: TaskBackend> Dashboard<B> {
    /// Admins start on everyone's tasks, other viewers on their own.
    pub fn new(viewer: User, backend: B) -> Self {
        let filters = FilterState::for_viewer(viewer.is_admin());
        Self {
            store: TaskStore::new(backend, scope_for(&filters)),
            viewer,
            filters,
            editor: TaskEditor::new(),
            modal: Modal::new(),
        }
    }

    pub fn viewer(&self) -> &User {
        &self.viewer
    }

    pub fn store(&self) -> &TaskStore<B> {
        &self.store
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn editor(&self) -> &TaskEditor {
        &self.editor
    }

    /// Field-level access to the draft (title, description, completed).
    pub fn editor_mut(&mut self) -> &mut TaskEditor {
        &mut self.editor
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Initial load for the current ownership scope.
    pub async fn mount(&mut self) {
        self.store.load().await;
    }

    /// Reloads after a failed load.
    pub async fn retry(&mut self) {
        self.store.retry().await;
    }

    /// Selects the ownership filter and reloads when the fetch scope changes.
    /// `All` without elevated access is ignored.
    pub async fn set_ownership(&mut self, filter: OwnershipFilter) -> bool {
        if !self.filters.select_ownership(filter) {
            return false;
        }
        self.store.set_scope(scope_for(&self.filters));
        self.store.load().await;
        true
    }

    /// Selects the completion filter. Purely local, never reloads.
    pub fn set_completion(&mut self, filter: CompletionFilter) -> bool {
        self.filters.select_completion(filter)
    }

    /// Store contents filtered for display, recomputed on every call.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filters.apply(self.store.tasks(), &self.viewer.id)
    }

    /// Edit and delete are offered to admins and to the task's owner.
    pub fn can_modify(&self, task: &Task) -> bool {
        self.viewer.is_admin() || task.is_owned_by(&self.viewer.id)
    }

    /// Looks up a task the viewer may modify, reporting through the modal when that fails.
    fn modifiable(&mut self, id: &TaskId) -> Option<Task> {
        let found = self.store.find(id).cloned();
        match found {
            None => {
                self.notify(ModalKind::Error, Message::TaskNotFoundWithId(id.to_string()));
                None
            }
            Some(task) if !self.can_modify(&task) => {
                self.notify(ModalKind::Error, Message::TaskModifyNotPermitted);
                None
            }
            Some(task) => Some(task),
        }
    }

    /// Points the editor at task `id`. Refused with an error notice when the
    /// task is unknown or not modifiable by the viewer.
    pub fn begin_edit(&mut self, id: &TaskId) -> bool {
        match self.modifiable(id) {
            Some(task) => {
                self.editor.set_target(Some(&task));
                true
            }
            None => false,
        }
    }

    /// Drops the edit and resets the draft to a blank task.
    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Sends the editor draft. Returns whether the server accepted it.
    pub async fn submit(&mut self) -> bool {
        let submission = match self.editor.submission() {
            Ok(submission) => submission,
            Err(e) => {
                self.notify(ModalKind::Error, Message::InvalidTask(e.to_string()));
                return false;
            }
        };

        match submission {
            Submission::Create(draft) => match self.store.create(&draft).await {
                Ok(_) => {
                    self.editor.set_target(None);
                    self.notify(ModalKind::Success, Message::TaskCreated);
                    true
                }
                Err(e) => {
                    self.notify(ModalKind::Error, Message::TaskCreateFailed(e.to_string()));
                    false
                }
            },
            Submission::Update(id, draft) => match self.store.update(&id, &draft).await {
                Ok(_) => {
                    self.editor.set_target(None);
                    self.notify(ModalKind::Success, Message::TaskUpdated);
                    true
                }
                Err(e) => {
                    self.notify(ModalKind::Error, Message::TaskUpdateFailed(e.to_string()));
                    false
                }
            },
        }
    }

    /// Opens the delete confirmation for `id`. Nothing is sent yet.
    pub fn request_delete(&mut self, id: &TaskId) -> bool {
        match self.modifiable(id) {
            Some(task) => {
                let prompt = Prompt::confirm(Message::ConfirmDeleteTask(task.title.clone()), ConfirmAction::DeleteTask(task.id))
                    .with_label(Message::LabelDelete.to_string());
                self.modal.open(prompt);
                true
            }
            None => false,
        }
    }

    /// Confirms the visible prompt and performs its action.
    /// A delete re-opens the modal with the outcome.
    pub async fn confirm(&mut self) -> Option<ConfirmAction> {
        let action = self.modal.confirm()?;
        if let ConfirmAction::DeleteTask(id) = &action {
            match self.store.remove(id).await {
                Ok(()) => {
                    if self.editor.target() == Some(id) {
                        self.editor.cancel();
                    }
                    self.notify(ModalKind::Success, Message::TaskDeleted);
                }
                Err(e) => self.notify(ModalKind::Error, Message::TaskDeleteFailed(e.to_string())),
            }
        }
        Some(action)
    }

    /// Hides the modal without running its action.
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    fn notify(&mut self, kind: ModalKind, message: Message) {
        self.modal.open(Prompt::notice(kind, message));
    }
}
