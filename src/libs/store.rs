//! Task store: the client-side copy of the task collection.
//!
//! The store is the only consistency mechanism against other editors, so it
//! never patches records locally. Every successful mutation is followed by a
//! full reload, and a reload always replaces the whole collection.
//!
//! Loads are tagged with an increasing epoch. A caller that starts several
//! loads (for instance by toggling the ownership filter quickly) only ever
//! sees the newest one applied; responses carrying an older epoch are dropped.
//!
//! ```text
//! begin_load() ─▶ LoadTicket{epoch: n} ─▶ fetch ─▶ finish_load(ticket, result)
//!                                                     │
//!                               epoch == latest ──────┤── applied
//!                               epoch <  latest ──────┘── discarded
//! ```

use super::task::{Task, TaskDraft, TaskId, ValidationError};
use crate::api::{ApiError, TaskBackend, TaskScope};
use thiserror::Error;

/// Why a create or update did not happen: rejected locally, or by the server.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Network(#[from] ApiError),
}

/// Observable state of the last applied load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing loaded yet.
    Idle,
    Loading,
    Ready,
    /// The last load failed; the collection is empty until a retry succeeds.
    Failed(String),
}

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub epoch: u64,
    pub scope: TaskScope,
}

/// Client-side task collection for one fetch scope.
pub struct TaskStore<B> {
    backend: B,
    scope: TaskScope,
    tasks: Vec<Task>,
    status: LoadStatus,
    latest_epoch: u64,
}

impl<B: TaskBackend> TaskStore<B> {
    /// Empty store in the `Idle` state. Nothing is fetched until [`TaskStore::load`].
    pub fn new(backend: B, scope: TaskScope) -> Self {
        Self {
            backend,
            scope,
            tasks: Vec::new(),
            status: LoadStatus::Idle,
            latest_epoch: 0,
        }
    }

    /// Tasks from the last applied load, in server order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// State of the last applied load.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Message of the failed load, if the store is in the `Failed` state.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn scope(&self) -> TaskScope {
        self.scope
    }

    /// Changes the scope used by subsequent loads.
    pub fn set_scope(&mut self, scope: TaskScope) {
        self.scope = scope;
    }

    /// Looks a task up in the current collection. No request is made.
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Issues a new epoch for the current scope. Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_epoch += 1;
        self.status = LoadStatus::Loading;
        LoadTicket {
            epoch: self.latest_epoch,
            scope: self.scope,
        }
    }

    /// Requests the collection for the ticket's scope without touching the store.
    pub async fn fetch(&self, ticket: LoadTicket) -> Result<Vec<Task>, ApiError> {
        self.backend.list_tasks(ticket.scope).await
    }

    /// Applies a load result if `ticket` is the latest issued. Returns whether it was applied.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Task>, ApiError>) -> bool {
        if ticket.epoch != self.latest_epoch {
            tracing::debug!(epoch = ticket.epoch, latest = self.latest_epoch, "discarding stale task load");
            return false;
        }
        match result {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), scope = ?ticket.scope, "tasks loaded");
                self.tasks = tasks;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load tasks");
                self.tasks.clear();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Fetches the collection for the current scope and replaces the store contents.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.fetch(ticket).await;
        self.finish_load(ticket, result);
    }

    /// Same as [`TaskStore::load`]; offered after a failed load.
    pub async fn retry(&mut self) {
        self.load().await
    }

    /// Validates and creates a task, then reloads. An invalid draft sends nothing.
    pub async fn create(&mut self, draft: &TaskDraft) -> Result<Task, TaskError> {
        draft.validate()?;
        let task = self.backend.create_task(draft).await?;
        self.load().await;
        Ok(task)
    }

    /// Validates and fully replaces task `id`, then reloads. An invalid draft sends nothing.
    pub async fn update(&mut self, id: &TaskId, draft: &TaskDraft) -> Result<Task, TaskError> {
        draft.validate()?;
        let task = self.backend.update_task(id, draft).await?;
        self.load().await;
        Ok(task)
    }

    /// Deletes task `id`, then reloads. Callers confirm with the user first.
    pub async fn remove(&mut self, id: &TaskId) -> Result<(), TaskError> {
        self.backend.delete_task(id).await?;
        self.load().await;
        Ok(())
    }
}
