//! Command-line interface and dispatch.
//!
//! Each subcommand is one discrete event: it binds to the current session if
//! it needs one, runs a full read-modify-write cycle against the user's
//! document, and renders whatever views it affects. Nothing here raises an
//! unhandled fault; failures degrade to a user-visible message.

pub mod backup;
pub mod calendar;
pub mod dashboard;
pub mod journal;
pub mod login;
pub mod logout;
pub mod progress;
pub mod quote;
pub mod restore;
pub mod task;
pub mod theme;
pub mod upcoming;

use crate::libs::error::AppError;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Sign in as a user (created on first sign-in)")]
    Login(login::LoginArgs),
    #[command(about = "Sign out of the current session")]
    Logout,
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage the journal")]
    Journal(journal::JournalArgs),
    #[command(about = "Show this month's calendar")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Show the next upcoming tasks")]
    Upcoming,
    #[command(about = "Show completion progress")]
    Progress,
    #[command(about = "Render the full dashboard")]
    Dashboard,
    #[command(about = "Write a backup snapshot of your data")]
    Backup(backup::BackupArgs),
    #[command(about = "Restore data from a snapshot file")]
    Restore(restore::RestoreArgs),
    #[command(about = "Toggle or set the color theme")]
    Theme(theme::ThemeArgs),
    #[command(about = "Print a motivational quote")]
    Quote(quote::QuoteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        init_tracing();
        let cli = Self::parse();
        match cli.command {
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::Journal(args) => journal::cmd(args),
            Commands::Calendar(args) => calendar::cmd(args),
            Commands::Upcoming => upcoming::cmd(),
            Commands::Progress => progress::cmd(),
            Commands::Dashboard => dashboard::cmd(),
            Commands::Backup(args) => backup::cmd(args),
            Commands::Restore(args) => restore::cmd(args),
            Commands::Theme(args) => theme::cmd(args),
            Commands::Quote(args) => quote::cmd(args),
        }
    }
}

fn init_tracing() {
    if is_debug_mode() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

/// Reports an application error with the right storage-specific wording.
pub(crate) fn report(err: &AppError) {
    if err.is_quota_exceeded() {
        msg_error!(Message::StorageQuotaExceeded);
    } else if matches!(err, AppError::Store(_)) {
        msg_error!(Message::StorageSaveFailed);
    } else {
        msg_error!(err);
    }
}
