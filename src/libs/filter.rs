//! Visible-task computation.
//!
//! The visible list is never stored: it is recomputed from the store
//! contents, the current [`FilterState`] and the viewer id every time it is
//! asked for. Both predicates preserve the arrival order of the store.

use super::task::{Task, UserId};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipFilter {
    All,
    Mine,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl OwnershipFilter {
    pub fn keeps(self, task: &Task, viewer: &UserId) -> bool {
        match self {
            OwnershipFilter::All => true,
            OwnershipFilter::Mine => task.is_owned_by(viewer),
        }
    }
}

impl CompletionFilter {
    pub fn keeps(self, task: &Task) -> bool {
        match self {
            CompletionFilter::All => true,
            CompletionFilter::Completed => task.completed,
            CompletionFilter::Pending => !task.completed,
        }
    }
}

impl fmt::Display for OwnershipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OwnershipFilter::All => "all",
            OwnershipFilter::Mine => "mine",
        })
    }
}

impl fmt::Display for CompletionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompletionFilter::All => "all",
            CompletionFilter::Completed => "completed",
            CompletionFilter::Pending => "pending",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    ownership: OwnershipFilter,
    completion: CompletionFilter,
    elevated: bool,
}

impl FilterState {
    /// Initial filters for a viewer: admins start on all tasks, everyone else on their own.
    pub fn for_viewer(elevated: bool) -> Self {
        Self {
            ownership: if elevated { OwnershipFilter::All } else { OwnershipFilter::Mine },
            completion: CompletionFilter::All,
            elevated,
        }
    }

    pub fn ownership(&self) -> OwnershipFilter {
        self.ownership
    }

    pub fn completion(&self) -> CompletionFilter {
        self.completion
    }

    /// Changes the ownership filter. Returns whether the state changed;
    /// `All` without elevated access is ignored.
    pub fn select_ownership(&mut self, filter: OwnershipFilter) -> bool {
        if filter == OwnershipFilter::All && !self.elevated {
            tracing::debug!("ignoring ownership filter 'all' without elevated access");
            return false;
        }
        let changed = self.ownership != filter;
        self.ownership = filter;
        changed
    }

    pub fn select_completion(&mut self, filter: CompletionFilter) -> bool {
        let changed = self.completion != filter;
        self.completion = filter;
        changed
    }

    pub fn apply<'a>(&self, tasks: &'a [Task], viewer: &UserId) -> Vec<&'a Task> {
        visible_tasks(tasks, self.ownership, self.completion, viewer)
    }
}

/// Intersection of the ownership and completion predicates, in store order.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    ownership: OwnershipFilter,
    completion: CompletionFilter,
    viewer: &UserId,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| ownership.keeps(task, viewer) && completion.keeps(task))
        .collect()
}
