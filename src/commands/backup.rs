use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Custom output file path (default: planpro_<user>_<date>.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: BackupArgs) -> Result<()> {
    let app = match App::current() {
        Ok(app) => app,
        Err(err) => {
            super::report(&err);
            return Ok(());
        }
    };
    match app.export_snapshot(args.output, Local::now().date_naive()) {
        Ok(path) => msg_success!(Message::BackupWritten(path.display().to_string())),
        Err(err) => super::report(&err),
    }
    Ok(())
}
