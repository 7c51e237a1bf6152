//! REST collaborator interfaces.
//!
//! The core never talks HTTP directly. It is written against two traits:
//! [`TaskBackend`] for the task CRUD endpoints and [`AuthBackend`] for the
//! authentication endpoints. [`rest::RestClient`] implements both over
//! `reqwest`; tests substitute in-memory backends.
//!
//! ## Endpoints
//!
//! ```text
//! POST   /auth/login       {email,password}        -> {user, token}
//! POST   /auth/register    {name,email,password}   -> {user, token}
//! GET    /auth/me                                  -> user
//! GET    /tasks[?filter=mine]                      -> Task[]
//! POST   /tasks            {title,description,completed} -> Task
//! PUT    /tasks/:id        {title,description,completed} -> Task
//! DELETE /tasks/:id                                -> 204
//! ```

use crate::libs::session::User;
use crate::libs::task::{Task, TaskDraft, TaskId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod rest;

pub use rest::RestClient;

/// Failure talking to the REST service: the request never completed, the
/// server answered with a non-2xx status, or the body could not be decoded.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

fn status_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("{} (status {})", message, status),
        None => format!("server responded with status {}", status),
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Which slice of the task collection to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    /// Every user's tasks; only meaningful with elevated access.
    All,
    Mine,
}

impl TaskScope {
    pub fn query(self) -> Option<(&'static str, &'static str)> {
        match self {
            TaskScope::All => None,
            TaskScope::Mine => Some(("filter", "mine")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[allow(async_fn_in_trait)]
pub trait TaskBackend {
    async fn list_tasks(&self, scope: TaskScope) -> Result<Vec<Task>, ApiError>;

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError>;

    /// Full replacement of the task with `id`.
    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, ApiError>;

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError>;

    /// `GET /auth/me` with the currently attached token.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// Attaches (or detaches) the bearer token sent with authenticated requests.
    fn set_token(&self, token: Option<String>);
}
