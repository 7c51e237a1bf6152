use super::{settle, App};
use crate::{
    api::RestClient,
    libs::{
        dashboard::Dashboard,
        filter::{CompletionFilter, OwnershipFilter},
        messages::Message,
        store::LoadStatus,
        task::{Task, TaskDraft, TaskId},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Show tasks
    List {
        /// Whose tasks to show; `all` needs admin rights
        #[arg(short, long, value_enum)]
        owner: Option<OwnershipFilter>,
        /// Completion state to show
        #[arg(short, long, value_enum, default_value_t = CompletionFilter::All)]
        status: CompletionFilter,
    },
    /// Create a task
    Add {
        /// Task title; prompted for when omitted
        title: Option<String>,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Create the task already completed
        #[arg(short, long)]
        completed: bool,
    },
    /// Edit a task (prompts for every field when no field option is given)
    Edit {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        completed: Option<bool>,
        /// Save without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete a task
    Delete {
        id: String,
        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    let mut dashboard = App::connect()?.dashboard().await?;
    match args.command {
        Some(TaskCommand::List { owner, status }) => handle_list(&mut dashboard, owner, status).await,
        Some(TaskCommand::Add {
            title,
            description,
            completed,
        }) => handle_add(&mut dashboard, title, description, completed).await,
        Some(TaskCommand::Edit {
            id,
            title,
            description,
            completed,
            yes,
        }) => handle_edit(&mut dashboard, TaskId::from(id), title, description, completed, yes).await,
        Some(TaskCommand::Delete { id, yes }) => handle_delete(&mut dashboard, TaskId::from(id), yes).await,
        None => handle_list(&mut dashboard, None, CompletionFilter::All).await,
    }
}

/// Loads the store, reporting a failed load. Returns whether tasks are available.
async fn load(dashboard: &mut Dashboard<RestClient>, owner: Option<OwnershipFilter>) -> bool {
    if owner == Some(OwnershipFilter::All) && !dashboard.viewer().is_admin() {
        msg_warning!(Message::AllTasksRequireAdmin);
    }
    let reloaded = match owner {
        Some(owner) => dashboard.set_ownership(owner).await,
        None => false,
    };
    if !reloaded {
        dashboard.mount().await;
    }
    !report_load_failure(dashboard)
}

/// Prints the store's load error, if any. Writes reload after success, so
/// this also catches a refresh that failed behind a successful mutation.
fn report_load_failure(dashboard: &Dashboard<RestClient>) -> bool {
    match dashboard.store().status() {
        LoadStatus::Failed(error) => {
            msg_error!(Message::TasksLoadFailed(error.clone()));
            msg_info!(Message::RetryHint);
            true
        }
        _ => false,
    }
}

/// Settles the modal, then reports a refresh that failed after the write.
async fn finish(dashboard: &mut Dashboard<RestClient>, assume_yes: bool) -> Result<()> {
    settle(dashboard, assume_yes).await?;
    report_load_failure(dashboard);
    Ok(())
}

async fn handle_list(dashboard: &mut Dashboard<RestClient>, owner: Option<OwnershipFilter>, status: CompletionFilter) -> Result<()> {
    if !load(dashboard, owner).await {
        return Ok(());
    }
    dashboard.set_completion(status);

    let ownership = dashboard.filters().ownership();
    let total = dashboard.store().tasks().len();
    let visible = dashboard.visible_tasks();

    msg_print!(Message::TasksHeader(ownership.to_string(), status.to_string()), true);
    if visible.is_empty() {
        let message = match (total, ownership) {
            (0, OwnershipFilter::Mine) => Message::NoTasksMine,
            (0, OwnershipFilter::All) => Message::NoTasksAll,
            _ => Message::NoTasksMatchFilter,
        };
        msg_info!(message);
        return Ok(());
    }

    View::tasks(&visible, ownership == OwnershipFilter::All);
    msg_print!(Message::TasksShown(visible.len(), total));
    Ok(())
}

async fn handle_add(dashboard: &mut Dashboard<RestClient>, title: Option<String>, description: String, completed: bool) -> Result<()> {
    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };

    let editor = dashboard.editor_mut();
    editor.set_target(None);
    editor.set_title(title);
    editor.set_description(description);
    editor.set_completed(completed);

    dashboard.submit().await;
    finish(dashboard, true).await
}

fn prompt_draft(task: &Task) -> Result<TaskDraft> {
    let current = TaskDraft::from(task);
    Ok(TaskDraft {
        title: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .default(current.title)
            .interact_text()?,
        description: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .default(current.description)
            .allow_empty(true)
            .interact_text()?,
        completed: Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskCompleted.to_string())
            .default(current.completed)
            .interact()?,
    })
}

async fn handle_edit(
    dashboard: &mut Dashboard<RestClient>,
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
    yes: bool,
) -> Result<()> {
    if !load(dashboard, None).await {
        return Ok(());
    }
    if !dashboard.begin_edit(&id) {
        return settle(dashboard, true).await;
    }
    let Some(task) = dashboard.store().find(&id).cloned() else {
        return Ok(());
    };

    let interactive = title.is_none() && description.is_none() && completed.is_none();
    let draft = if interactive {
        msg_print!(Message::EditingTask(task.title.clone()), true);
        prompt_draft(&task)?
    } else {
        let current = TaskDraft::from(&task);
        TaskDraft {
            title: title.unwrap_or(current.title),
            description: description.unwrap_or(current.description),
            completed: completed.unwrap_or(current.completed),
        }
    };

    if draft == TaskDraft::from(&task) {
        msg_info!(Message::NoChangesDetected);
        dashboard.cancel_edit();
        return Ok(());
    }

    let editor = dashboard.editor_mut();
    editor.set_title(draft.title);
    editor.set_description(draft.description);
    editor.set_completed(draft.completed);

    if !yes {
        msg_print!(Message::TaskEditPreview, true);
        let preview = Task {
            title: dashboard.editor().draft().title.clone(),
            description: Some(dashboard.editor().draft().description.clone()),
            completed: dashboard.editor().draft().completed,
            ..task
        };
        View::tasks(&[&preview], false);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmTaskUpdate.to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            dashboard.cancel_edit();
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    dashboard.submit().await;
    finish(dashboard, true).await
}

async fn handle_delete(dashboard: &mut Dashboard<RestClient>, id: TaskId, yes: bool) -> Result<()> {
    if !load(dashboard, None).await {
        return Ok(());
    }
    dashboard.request_delete(&id);
    finish(dashboard, yes).await
}
