use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    match App::logout() {
        Ok(fallback) => {
            msg_success!(Message::SignedOut);
            msg_print!(Message::GlobalThemeSet(fallback.label().to_string()));
        }
        Err(err) => super::report(&err),
    }
    Ok(())
}
