use super::App;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut app = App::connect()?;
    app.session.logout();
    msg_success!(Message::LoggedOut);

    Ok(())
}
