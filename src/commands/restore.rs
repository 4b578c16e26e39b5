use crate::commands::dashboard;
use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Snapshot file to restore from
    #[arg(required = true)]
    file: PathBuf,
}

pub fn cmd(args: RestoreArgs) -> Result<()> {
    let app = match App::current() {
        Ok(app) => app,
        Err(err) => {
            super::report(&err);
            return Ok(());
        }
    };
    let raw = match fs::read_to_string(&args.file) {
        Ok(raw) => raw,
        Err(_) => {
            msg_error!(Message::InvalidSnapshot);
            return Ok(());
        }
    };
    match app.import_snapshot(&raw) {
        Ok(_) => {
            msg_success!(Message::RestoreCompleted);
            dashboard::render(&app)
        }
        Err(err) => {
            super::report(&err);
            Ok(())
        }
    }
}
