//! Authentication state and its lifecycle.
//!
//! [`SessionManager`] replaces a global auth context: it is created in the
//! `loading` state, resolves exactly once through [`SessionManager::initialize`],
//! and is torn down by [`SessionManager::logout`]. Route access goes through
//! [`SessionManager::guard`].
//!
//! ```text
//!  new() ──▶ loading=true ──initialize()──▶ loading=false
//!                                 │
//!             token + /auth/me ok │ otherwise
//!                     ▼           ▼
//!               user=Some(..)   user=None, token cleared
//! ```

use super::token::TokenStore;
use crate::api::{ApiError, AuthBackend, AuthResponse, LoginCredentials, Registration};
use crate::libs::task::{UserId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Account role as sent by the server. Only `"admin"` is elevated; any other
/// value, or no value at all, is a plain member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "admin",
            Role::Member => "member",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Elevated access: may list and modify every user's tasks.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Who is signed in, and whether the start-up check is still running.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

/// Outcome of the route guard.
#[derive(Debug, PartialEq)]
pub enum Access<'a> {
    /// The start-up session check has not resolved yet.
    Pending,
    RedirectToLogin,
    Granted(&'a User),
}

/// Failure of login or registration.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Network(#[from] ApiError),
    #[error("could not persist session token: {0}")]
    Storage(String),
}

/// Owns the session, the persisted token and the auth backend the token is attached to.
pub struct SessionManager<A> {
    backend: A,
    tokens: TokenStore,
    session: Session,
}

impl<A: AuthBackend> SessionManager<A> {
    /// A manager in the loading state; call [`SessionManager::initialize`] next.
    pub fn new(backend: A, tokens: TokenStore) -> Self {
        Self {
            backend,
            tokens,
            session: Session {
                user: None,
                loading: true,
            },
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }

    /// Start-up session check. Only the first call does any work.
    pub async fn initialize(&mut self) {
        if !self.session.loading {
            return;
        }

        let token = match self.tokens.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "stored token unreadable, discarding");
                let _ = self.tokens.clear();
                None
            }
        };

        if let Some(token) = token {
            self.backend.set_token(Some(token));
            match self.backend.current_user().await {
                Ok(user) => {
                    tracing::debug!(user = %user.id, "session restored");
                    self.session.user = Some(user);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "session check failed, signing out");
                    self.drop_credentials();
                }
            }
        }

        self.session.loading = false;
    }

    /// Signs in and persists the returned token. Empty fields fail before any request.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        require("email", email)?;
        require("password", password)?;
        let credentials = LoginCredentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.backend.login(&credentials).await?;
        self.establish(response)
    }

    /// Creates an account and signs in with it.
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> Result<&User, AuthError> {
        require("name", name)?;
        require("email", email)?;
        require("password", password)?;
        let registration = Registration {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.backend.register(&registration).await?;
        self.establish(response)
    }

    /// Forgets the user and removes the token from disk and from the backend.
    pub fn logout(&mut self) {
        self.drop_credentials();
        self.session.loading = false;
    }

    /// Route guard for commands that need a signed-in user.
    pub fn guard(&self) -> Access<'_> {
        if self.session.loading {
            return Access::Pending;
        }
        match &self.session.user {
            Some(user) => Access::Granted(user),
            None => Access::RedirectToLogin,
        }
    }

    fn establish(&mut self, response: AuthResponse) -> Result<&User, AuthError> {
        self.tokens.save(&response.token).map_err(|e| AuthError::Storage(e.to_string()))?;
        self.backend.set_token(Some(response.token));
        self.session.loading = false;
        let user: &User = self.session.user.insert(response.user);
        Ok(user)
    }

    fn drop_credentials(&mut self) {
        if let Err(e) = self.tokens.clear() {
            tracing::warn!(error = %e, "failed to remove stored token");
        }
        self.backend.set_token(None);
        self.session.user = None;
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
