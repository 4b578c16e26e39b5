//! Task management commands.
//!
//! All task operations require an active session. Destructive operations and
//! the large-list gate go through a dialoguer confirmation that `--yes`
//! bypasses for scripting. Edits are one structured request: every field is
//! a flag, supplied fields apply together, nothing prompts sequentially.

use crate::libs::app::{App, TaskDraft, TaskPatch};
use crate::libs::messages::Message;
use crate::libs::task::{display_order, Category, Priority};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Free-form note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Category
        #[arg(short, long, value_enum, default_value_t = Category::Other)]
        cat: Category,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Priority
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Skip the large-list confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Toggle a task between done and pending
    Done {
        /// Task id
        id: u64,
    },
    /// Edit task fields in one request
    Edit {
        /// Task id
        id: u64,
        /// New title (empty titles are ignored)
        #[arg(short, long)]
        title: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
        /// New due date (YYYY-MM-DD); pass "" to clear it
        #[arg(short, long)]
        date: Option<String>,
        /// New priority
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// New category
        #[arg(short, long, value_enum)]
        cat: Option<Category>,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove all completed tasks
    ClearDone {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List tasks, optionally filtered to one due date
    List {
        /// Only tasks due on this exact date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let app = match App::current() {
        Ok(app) => app,
        Err(err) => {
            super::report(&err);
            return Ok(());
        }
    };
    match args.command {
        TaskCommand::Add { title, note, cat, date, priority, yes } => {
            handle_add(&app, TaskDraft { title, cat, note, date, priority }, yes)
        }
        TaskCommand::Done { id } => handle_done(&app, id),
        TaskCommand::Edit { id, title, note, date, priority, cat } => {
            handle_edit(&app, id, TaskPatch { title, note, date, priority, cat })
        }
        TaskCommand::Delete { id, yes } => handle_delete(&app, id, yes),
        TaskCommand::ClearDone { yes } => handle_clear_done(&app, yes),
        TaskCommand::List { date } => handle_list(&app, date),
    }
}

fn handle_add(app: &App, draft: TaskDraft, yes: bool) -> Result<()> {
    let document = app.document();
    if !yes && document.over_volume_threshold() {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmLargeTaskList(document.tasks.len()).to_string())
            .default(false)
            .interact()?;
        if !proceed {
            return Ok(());
        }
    }
    match app.add_task(draft) {
        Ok(task) => msg_success!(Message::TaskCreated(task.title)),
        Err(err) => super::report(&err),
    }
    Ok(())
}

fn handle_done(app: &App, id: u64) -> Result<()> {
    match app.toggle_done(id) {
        Ok(Some(task)) if task.done => msg_success!(Message::TaskMarkedDone(task.title)),
        Ok(Some(task)) => msg_success!(Message::TaskMarkedPending(task.title)),
        Ok(None) => msg_info!(Message::TaskNotFoundWithId(id)),
        Err(err) => super::report(&err),
    }
    Ok(())
}

fn handle_edit(app: &App, id: u64, patch: TaskPatch) -> Result<()> {
    if patch.is_empty() {
        msg_info!(Message::NoChangesRequested);
        return Ok(());
    }
    match app.edit_task(id, patch) {
        Ok(Some(outcome)) => {
            if outcome.title_ignored {
                msg_warning!(Message::TaskTitleKept);
            }
            msg_success!(Message::TaskUpdated(outcome.task.title));
        }
        Ok(None) => msg_info!(Message::TaskNotFoundWithId(id)),
        Err(err) => super::report(&err),
    }
    Ok(())
}

fn handle_delete(app: &App, id: u64, yes: bool) -> Result<()> {
    let document = app.document();
    let Some(task) = document.tasks.iter().find(|task| task.id == id) else {
        msg_info!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };
    if !yes {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !proceed {
            return Ok(());
        }
    }
    match app.delete_task(id) {
        Ok(Some(removed)) => msg_success!(Message::TaskDeleted(removed.title)),
        Ok(None) => msg_info!(Message::TaskNotFoundWithId(id)),
        Err(err) => super::report(&err),
    }
    Ok(())
}

fn handle_clear_done(app: &App, yes: bool) -> Result<()> {
    let done = app.document().done_count();
    if done == 0 {
        msg_info!(Message::NoDoneTasks);
        return Ok(());
    }
    if !yes {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearDone(done).to_string())
            .default(false)
            .interact()?;
        if !proceed {
            return Ok(());
        }
    }
    match app.clear_done() {
        Ok(removed) => msg_success!(Message::TasksDeletedCount(removed)),
        Err(err) => super::report(&err),
    }
    Ok(())
}

fn handle_list(app: &App, date: Option<String>) -> Result<()> {
    let document = app.document();
    match date {
        Some(date) => {
            let due = display_order(
                document.tasks.iter().filter(|task| task.date.as_deref() == Some(date.as_str())),
            );
            if due.is_empty() {
                msg_info!(Message::NoTasksForDate(date));
            } else {
                msg_print!(Message::SelectedDayHeader(date), true);
                View::tasks(&due);
            }
        }
        None => {
            let ordered = display_order(document.tasks.iter());
            if ordered.is_empty() {
                msg_info!(Message::NoTasksYet);
            } else {
                msg_print!(Message::TasksHeader, true);
                View::tasks(&ordered);
            }
        }
    }
    Ok(())
}
