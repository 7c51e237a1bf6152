//! Task editor form state.
//!
//! The draft mirrors either a blank task or the task currently targeted for
//! editing. Every change of target rewrites all draft fields, so values from a
//! previous edit session never carry over.

use super::task::{Task, TaskDraft, TaskId, ValidationError};

/// What a submit turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskEditor {
    target: Option<TaskId>,
    draft: TaskDraft,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the editor at `task` (or at a new blank task) and resynchronizes every field.
    pub fn set_target(&mut self, task: Option<&Task>) {
        match task {
            Some(task) => {
                self.target = Some(task.id.clone());
                self.draft = TaskDraft::from(task);
            }
            None => {
                self.target = None;
                self.draft = TaskDraft::default();
            }
        }
    }

    pub fn target(&self) -> Option<&TaskId> {
        self.target.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.draft.completed = completed;
    }

    /// Validates the draft and decides between create and update.
    pub fn submission(&self) -> Result<Submission, ValidationError> {
        self.draft.validate()?;
        Ok(match &self.target {
            Some(id) => Submission::Update(id.clone(), self.draft.clone()),
            None => Submission::Create(self.draft.clone()),
        })
    }

    pub fn cancel(&mut self) {
        self.set_target(None);
    }
}
