//! Command-line surface.
//!
//! Each subcommand builds what it needs from [`App`]: the REST client, the
//! session manager and, for task commands, a [`Dashboard`] for the signed-in
//! viewer. Modal prompts raised by the dashboard are settled interactively by
//! [`settle`].

pub mod init;
pub mod login;
pub mod logout;
pub mod register;
pub mod task;

use crate::api::{RestClient, TaskBackend};
use crate::libs::config::Config;
use crate::libs::dashboard::Dashboard;
use crate::libs::messages::Message;
use crate::libs::modal::ModalKind;
use crate::libs::session::{Access, SessionManager};
use crate::libs::token::TokenStore;
use crate::{msg_bail_anyhow, msg_debug, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the task server connection")]
    Init(init::InitArgs),
    #[command(about = "Create an account")]
    Register(register::RegisterArgs),
    #[command(about = "Log in and store the session token")]
    Login(login::LoginArgs),
    #[command(about = "Log out and remove the stored session token")]
    Logout,
    #[command(about = "Show the signed-in user")]
    Whoami,
    #[command(about = "List, create, edit and delete tasks")]
    Task(task::TaskArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Register(args) => register::cmd(args).await,
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Whoami => {
                let mut app = App::connect()?;
                let user = app.require_user().await?;
                msg_print!(Message::CurrentUser {
                    name: user.name.clone(),
                    email: user.email.clone().unwrap_or_default(),
                    role: user.role.to_string(),
                });
                Ok(())
            }
            Commands::Task(args) => task::cmd(args).await,
        }
    }
}

/// Wiring shared by the commands.
pub struct App {
    pub api: RestClient,
    pub tokens: TokenStore,
    pub session: SessionManager<RestClient>,
}

impl App {
    pub fn connect() -> Result<Self> {
        let config = Config::read()?;
        let server = config.server_or_default();
        msg_debug!("Using task server {}", server.api_url);
        let api = RestClient::new(&server)?;
        let tokens = TokenStore::new()?;
        Ok(Self {
            session: SessionManager::new(api.clone(), tokens.clone()),
            api,
            tokens,
        })
    }

    /// Runs the session check and returns the signed-in user, or fails with a hint to log in.
    pub async fn require_user(&mut self) -> Result<crate::libs::session::User> {
        let had_token = self.tokens.path().exists();
        self.session.initialize().await;
        match self.session.guard() {
            Access::Granted(user) => Ok(user.clone()),
            _ if had_token => msg_bail_anyhow!(Message::SessionExpired),
            _ => msg_bail_anyhow!(Message::NotLoggedIn),
        }
    }

    pub async fn dashboard(mut self) -> Result<Dashboard<RestClient>> {
        let user = self.require_user().await?;
        Ok(Dashboard::new(user, self.api))
    }
}

/// Works through the dashboard's modal until it is hidden.
///
/// Questions become a select between the prompt's confirm label and cancel
/// (`assume_yes` skips it); notices are printed and dismissed.
pub async fn settle<B: TaskBackend>(dashboard: &mut Dashboard<B>, assume_yes: bool) -> Result<()> {
    while let Some(prompt) = dashboard.modal().prompt().cloned() {
        if prompt.show_cancel {
            let confirmed = assume_yes || {
                let items = [prompt.confirm_label.clone(), Message::LabelCancel.to_string()];
                Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(prompt.message.to_string())
                    .items(&items)
                    .default(1)
                    .interact()?
                    == 0
            };
            if confirmed {
                dashboard.confirm().await;
            } else {
                dashboard.close_modal();
                msg_info!(Message::OperationCancelled);
            }
        } else {
            match prompt.kind {
                ModalKind::Success => msg_success!(prompt.message),
                ModalKind::Error => msg_error!(prompt.message),
                ModalKind::Info => msg_info!(prompt.message),
            }
            dashboard.confirm().await;
        }
    }
    Ok(())
}
