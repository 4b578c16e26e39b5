use crate::commands::dashboard;
use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// User name to sign in as
    #[arg(required = true)]
    name: String,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    match App::login(&args.name) {
        Ok((app, theme)) => {
            msg_success!(Message::SignedIn(app.user.clone()));
            msg_print!(Message::ThemeSet(theme.label().to_string()));
            dashboard::render(&app)
        }
        Err(err) => {
            super::report(&err);
            Ok(())
        }
    }
}
