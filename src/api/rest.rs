//! `reqwest` implementation of the task and auth backends.
//!
//! A single [`RestClient`] is shared by the session manager and the
//! dashboard. Cloning is cheap: the HTTP connection pool and the attached
//! bearer token are both reference counted, so a token set after login is
//! seen by every clone.

use super::{ApiError, AuthBackend, AuthResponse, LoginCredentials, Registration, TaskBackend, TaskScope};
use crate::libs::config::ServerConfig;
use crate::libs::session::User;
use crate::libs::task::{Task, TaskDraft, TaskId};
use anyhow::Result;
use parking_lot::RwLock;
use reqwest::{header, Client, IntoUrl, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const LOGIN_URL: &str = "auth/login";
const REGISTER_URL: &str = "auth/register";
const ME_URL: &str = "auth/me";
const TASKS_URL: &str = "tasks";

/// Error body shape used by the service: `{ "message": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl RestClient {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    /// URL of a single task. The id is percent-encoded as one path segment,
    /// so ids containing `/`, `?` or `#` cannot escape it.
    pub fn task_url(&self, id: &TaskId) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.url(TASKS_URL)).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(id.as_str());
        Ok(url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        self.request_to(method, self.url(path))
    }

    fn request_to(&self, method: Method, url: impl IntoUrl) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match self.token.read().as_deref() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Turns non-2xx responses into [`ApiError::Status`], keeping the server's message when it sent one.
    async fn check(res: Response) -> Result<Response, ApiError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body).ok().and_then(|b| b.message);
        tracing::debug!(status = status.as_u16(), ?message, "api error response");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let res = Self::check(builder.send().await?).await?;
        res.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl TaskBackend for RestClient {
    async fn list_tasks(&self, scope: TaskScope) -> Result<Vec<Task>, ApiError> {
        let mut builder = self.request(Method::GET, TASKS_URL);
        if let Some(query) = scope.query() {
            builder = builder.query(&[query]);
        }
        Self::send_json(builder).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        Self::send_json(self.request(Method::POST, TASKS_URL).json(draft)).await
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, ApiError> {
        let url = self.task_url(id)?;
        tracing::debug!(method = "PUT", %url, "api request");
        Self::send_json(self.request_to(Method::PUT, url).json(draft)).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.task_url(id)?;
        tracing::debug!(method = "DELETE", %url, "api request");
        Self::check(self.request_to(Method::DELETE, url).send().await?).await?;
        Ok(())
    }
}

impl AuthBackend for RestClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        Self::send_json(self.request(Method::POST, LOGIN_URL).json(credentials)).await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        Self::send_json(self.request(Method::POST, REGISTER_URL).json(registration)).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        Self::send_json(self.request(Method::GET, ME_URL)).await
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }
}
