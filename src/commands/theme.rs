use crate::libs::app::App;
use crate::libs::document::Theme;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use crate::storage::session::Session;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Theme to set; omit to toggle the current one
    #[arg(value_enum)]
    theme: Option<Theme>,
}

pub fn cmd(args: ThemeArgs) -> Result<()> {
    match App::current() {
        Ok(app) => {
            let next = match args.theme {
                Some(theme) => theme,
                None => app.document().theme.toggled(),
            };
            match app.set_theme(next) {
                Ok(()) => msg_success!(Message::ThemeSet(next.label().to_string())),
                Err(err) => super::report(&err),
            }
        }
        // Signed out: only the global fallback changes
        Err(AppError::NotSignedIn) => {
            let next = args.theme.unwrap_or_else(|| Session::global_theme().toggled());
            match Session::set_global_theme(next) {
                Ok(()) => msg_success!(Message::GlobalThemeSet(next.label().to_string())),
                Err(_) => msg_error!(Message::StorageSaveFailed),
            }
        }
        Err(err) => super::report(&err),
    }
    Ok(())
}
