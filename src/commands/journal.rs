use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct JournalArgs {
    #[command(subcommand)]
    command: Option<JournalCommand>,
}

#[derive(Debug, Subcommand)]
enum JournalCommand {
    /// Show the journal
    Show,
    /// Replace the journal text
    Set {
        /// New journal text
        text: String,
    },
    /// Clear the journal
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: JournalArgs) -> Result<()> {
    let app = match App::current() {
        Ok(app) => app,
        Err(err) => {
            super::report(&err);
            return Ok(());
        }
    };
    match args.command {
        Some(JournalCommand::Set { text }) => handle_set(&app, text),
        Some(JournalCommand::Clear { yes }) => handle_clear(&app, yes),
        Some(JournalCommand::Show) | None => handle_show(&app),
    }
}

fn handle_show(app: &App) -> Result<()> {
    let document = app.document();
    if document.journal.is_empty() {
        msg_info!(Message::JournalEmpty);
    } else {
        msg_print!(Message::JournalHeader, true);
        View::journal(&document.journal);
    }
    Ok(())
}

fn handle_set(app: &App, text: String) -> Result<()> {
    match app.set_journal(text) {
        Ok(()) => msg_success!(Message::JournalSaved),
        Err(err) => super::report(&err),
    }
    Ok(())
}

fn handle_clear(app: &App, yes: bool) -> Result<()> {
    if !yes {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearJournal.to_string())
            .default(false)
            .interact()?;
        if !proceed {
            return Ok(());
        }
    }
    match app.clear_journal() {
        Ok(()) => msg_success!(Message::JournalCleared),
        Err(err) => super::report(&err),
    }
    Ok(())
}
