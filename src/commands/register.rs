use super::App;
use crate::{libs::messages::Message, msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name; prompted for when omitted
    #[arg(short, long)]
    name: Option<String>,
    /// Account email; prompted for when omitted
    #[arg(short, long)]
    email: Option<String>,
}

fn ask(value: Option<String>, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .interact_text()?),
    }
}

pub async fn cmd(register_args: RegisterArgs) -> Result<()> {
    let name = ask(register_args.name, Message::PromptName)?;
    let email = ask(register_args.email, Message::PromptEmail)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .with_confirmation(Message::PromptPasswordRepeat.to_string(), Message::PasswordMismatch.to_string())
        .interact()?;

    let mut app = App::connect()?;
    match app.session.register(&name, &email, &password).await {
        Ok(user) => msg_success!(Message::Registered(user.name.clone())),
        Err(e) => msg_error!(Message::RegisterFailed(e.to_string())),
    }

    Ok(())
}
