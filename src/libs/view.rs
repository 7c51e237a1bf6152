//! Terminal rendering of task listings.

use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a table. The owner column is only shown for all-users listings.
    pub fn tasks(tasks: &[&Task], show_owner: bool) {
        Self::task_table(tasks, show_owner).printstd();
    }

    pub fn task_table(tasks: &[&Task], show_owner: bool) -> Table {
        let mut table = Table::new();

        if show_owner {
            table.set_titles(row!["ID", "TITLE", "DESCRIPTION", "STATUS", "ASSIGNED TO"]);
        } else {
            table.set_titles(row!["ID", "TITLE", "DESCRIPTION", "STATUS"]);
        }
        for task in tasks {
            let description = task.description.as_deref().unwrap_or("");
            if show_owner {
                table.add_row(row![task.id, task.title, description, Self::status(task), task.owner_label()]);
            } else {
                table.add_row(row![task.id, task.title, description, Self::status(task)]);
            }
        }
        table
    }

    pub fn status(task: &Task) -> &'static str {
        if task.completed {
            "completed"
        } else {
            "pending"
        }
    }
}
