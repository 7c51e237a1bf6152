use super::App;
use crate::{libs::messages::Message, msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email; prompted for when omitted
    #[arg(short, long)]
    email: Option<String>,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let email = match login_args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let mut app = App::connect()?;
    match app.session.login(&email, &password).await {
        Ok(user) => msg_success!(Message::Welcome(user.name.clone())),
        Err(e) => msg_error!(Message::LoginFailed(e.to_string())),
    }

    Ok(())
}
