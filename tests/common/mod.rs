#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use taskboard::api::{ApiError, AuthBackend, AuthResponse, LoginCredentials, Registration, TaskBackend, TaskScope};
use taskboard::libs::session::{Role, User};
use taskboard::libs::task::{Id, Task, TaskDraft, TaskId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(TaskScope),
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
    Delete(TaskId),
    Login(String),
    Register(String),
    Me,
}

#[derive(Default)]
pub struct MockState {
    pub tasks: Vec<Task>,
    pub next_id: i64,
    pub viewer: Option<UserId>,
    pub calls: Vec<Call>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
    pub accounts: Vec<(String, String, User)>,
    pub valid_tokens: Vec<(String, User)>,
    pub token: Option<String>,
}

/// In-memory stand-in for the REST service. Clones share state, so a test
/// keeps one handle while the code under test owns another.
#[derive(Clone, Default)]
pub struct MockBackend {
    pub state: Arc<Mutex<MockState>>,
}

pub fn user(id: i64, name: &str, role: Role) -> User {
    User {
        id: Id::from(id),
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        role,
    }
}

pub fn task(id: i64, user_id: i64, completed: bool) -> Task {
    Task {
        id: Id::from(id),
        title: format!("Task {}", id),
        description: Some(format!("Description {}", id)),
        completed,
        user_id: Id::from(user_id),
        user_name: None,
    }
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: Some("Internal error".to_string()),
    }
}

impl MockBackend {
    pub fn with_tasks(viewer: i64, tasks: Vec<Task>) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state.lock();
            state.next_id = tasks.len() as i64 + 100;
            state.tasks = tasks;
            state.viewer = Some(Id::from(viewer));
        }
        backend
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn list_calls(&self) -> usize {
        self.count(|c| matches!(c, Call::List(_)))
    }

    pub fn add_account(&self, email: &str, password: &str, user: User) {
        self.state.lock().accounts.push((email.to_string(), password.to_string(), user));
    }

    pub fn accept_token(&self, token: &str, user: User) {
        self.state.lock().valid_tokens.push((token.to_string(), user));
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().token.clone()
    }
}

impl TaskBackend for MockBackend {
    async fn list_tasks(&self, scope: TaskScope) -> Result<Vec<Task>, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::List(scope));
        if state.fail_list {
            return Err(server_error());
        }
        let viewer = state.viewer.clone();
        Ok(state
            .tasks
            .iter()
            .filter(|t| scope == TaskScope::All || Some(&t.user_id) == viewer.as_ref())
            .cloned()
            .collect())
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Create(draft.clone()));
        if state.fail_create {
            return Err(server_error());
        }
        state.next_id += 1;
        let task = Task {
            id: Id::from(state.next_id),
            title: draft.title.clone(),
            description: Some(draft.description.clone()),
            completed: draft.completed,
            user_id: state.viewer.clone().unwrap_or_else(|| Id::from(0)),
            user_name: None,
        };
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Update(id.clone(), draft.clone()));
        if state.fail_update {
            return Err(server_error());
        }
        let task = state.tasks.iter_mut().find(|t| &t.id == id).ok_or(ApiError::Status {
            status: 404,
            message: Some("Task not found".to_string()),
        })?;
        task.title = draft.title.clone();
        task.description = Some(draft.description.clone());
        task.completed = draft.completed;
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Delete(id.clone()));
        if state.fail_delete {
            return Err(server_error());
        }
        state.tasks.retain(|t| &t.id != id);
        Ok(())
    }
}

impl AuthBackend for MockBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Login(credentials.email.clone()));
        let user = state
            .accounts
            .iter()
            .find(|(email, password, _)| email == &credentials.email && password == &credentials.password)
            .map(|(_, _, user)| user.clone())
            .ok_or(ApiError::Status {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            })?;
        let token = format!("token-{}", user.id);
        state.valid_tokens.push((token.clone(), user.clone()));
        Ok(AuthResponse { user, token })
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Register(registration.email.clone()));
        if state.accounts.iter().any(|(email, _, _)| email == &registration.email) {
            return Err(ApiError::Status {
                status: 409,
                message: Some("Email already registered".to_string()),
            });
        }
        let user = User {
            id: Id::from(state.accounts.len() as i64 + 1),
            name: registration.name.clone(),
            email: Some(registration.email.clone()),
            role: Role::Member,
        };
        state.accounts.push((registration.email.clone(), registration.password.clone(), user.clone()));
        let token = format!("token-{}", user.id);
        state.valid_tokens.push((token.clone(), user.clone()));
        Ok(AuthResponse { user, token })
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Me);
        let token = state.token.clone();
        state
            .valid_tokens
            .iter()
            .find(|(valid, _)| Some(valid) == token.as_ref())
            .map(|(_, user)| user.clone())
            .ok_or(ApiError::Status {
                status: 401,
                message: Some("Invalid token".to_string()),
            })
    }

    fn set_token(&self, token: Option<String>) {
        self.state.lock().token = token;
    }
}
