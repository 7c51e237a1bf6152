//! Task records as exchanged with the REST service.
//!
//! Tasks are created, replaced and deleted on the server only; the client
//! never invents identifiers and never patches records locally. Identifiers
//! are opaque: the service may send them as JSON numbers or strings, and both
//! are kept as strings here.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque identifier of a task or a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct Id(String);

pub type TaskId = Id;
pub type UserId = Id;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => Id(n.to_string()),
            RawId::Text(s) => Id(s),
        }
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id(s)
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id(n.to_string())
    }
}

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub user_id: UserId,
    /// Owner display name; only sent in "all tasks" listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Task {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Owner label for listings, falling back to the raw id.
    pub fn owner_label(&self) -> String {
        match &self.user_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("User {}", self.user_id),
        }
    }
}

/// Body of a create or full-replace request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, completed: bool) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            completed,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        Ok(())
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            completed: task.completed,
        }
    }
}

/// Input rejected before anything is sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_numbers_and_strings() {
        let task: Task = serde_json::from_str(r#"{"id":1,"title":"a","completed":true,"userId":"7"}"#).unwrap();
        assert_eq!(task.id, Id::from(1));
        assert_eq!(task.user_id, Id::from("7"));
        assert_eq!(task.description, None);
    }

    #[test]
    fn owner_label_falls_back_to_id() {
        let mut task: Task = serde_json::from_str(r#"{"id":"x","title":"a","userId":9}"#).unwrap();
        assert_eq!(task.owner_label(), "User 9");
        task.user_name = Some("Ana".to_string());
        assert_eq!(task.owner_label(), "Ana");
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(TaskDraft::new("   ", "", false).validate(), Err(ValidationError::EmptyField("title")));
        assert!(TaskDraft::new("Write docs", "", false).validate().is_ok());
    }
}
