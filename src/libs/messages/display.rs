//! Display implementation for planpro application messages.
//!
//! All user-facing text lives here, in one place, so every command renders
//! messages the same way. Variants with parameters interpolate them through
//! `format!`, keeping the call sites free of string literals.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SignedIn(name) => format!("Hi, {}! You are signed in.", name),
            Message::SignedOut => "Signed out.".to_string(),
            Message::UsernameRequired => "Type a user name to sign in.".to_string(),
            Message::NotSignedIn => "Sign in first: planpro login <name>".to_string(),
            Message::NotSignedInHint => "Not signed in. Run 'planpro login <name>' to get started.".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskMarkedDone(title) => format!("Task '{}' marked done", title),
            Message::TaskMarkedPending(title) => format!("Task '{}' marked pending", title),
            Message::TaskNotFoundWithId(id) => format!("No task with id {}", id),
            Message::TasksDeletedCount(count) => format!("Removed {} completed task(s)", count),
            Message::TasksHeader => "Tasks".to_string(),
            Message::NoTasksYet => "No tasks yet!".to_string(),
            Message::NoTasksForDate(date) => format!("No tasks due on {}", date),
            Message::NoDoneTasks => "No completed tasks to clear.".to_string(),
            Message::NoChangesRequested => "Nothing to change. Pass at least one field flag.".to_string(),
            Message::TaskTitleRequired => "A task needs a non-empty title.".to_string(),
            Message::TaskTitleKept => "Empty title ignored, keeping the current one.".to_string(),
            Message::InvalidDate(value) => format!("'{}' is not a valid YYYY-MM-DD date", value),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmClearDone(count) => format!("Remove {} completed task(s)?", count),
            Message::ConfirmLargeTaskList(count) => format!("You already have {} tasks. Add another?", count),

            // === JOURNAL MESSAGES ===
            Message::JournalSaved => "Journal saved locally.".to_string(),
            Message::JournalCleared => "Journal cleared.".to_string(),
            Message::JournalEmpty => "Journal is empty.".to_string(),
            Message::JournalHeader => "Journal".to_string(),
            Message::ConfirmClearJournal => "Clear journal?".to_string(),

            // === VIEW MESSAGES ===
            Message::CalendarHeader(month) => format!("Calendar for {}", month),
            Message::SelectedDayHeader(date) => format!("Tasks due {}", date),
            Message::InvalidCalendarDay(day, days_in_month) => {
                format!("Day {} is out of range for this month (1..{})", day, days_in_month)
            }
            Message::UpcomingHeader => "Upcoming tasks".to_string(),
            Message::NoUpcomingTasks => "No upcoming tasks!".to_string(),
            Message::ProgressLabel(done, total) => format!("{} of {} tasks completed", done, total),

            // === BACKUP MESSAGES ===
            Message::BackupWritten(path) => format!("Backup written to {}", path),
            Message::RestoreCompleted => "Restore completed.".to_string(),
            Message::InvalidSnapshot => "Failed to restore: invalid file.".to_string(),

            // === THEME MESSAGES ===
            Message::ThemeSet(theme) => format!("Theme set to {}", theme),
            Message::GlobalThemeSet(theme) => format!("Default theme set to {} (applies before sign-in)", theme),

            // === QUOTE MESSAGES ===
            Message::QuoteCopied => "Quote copied to clipboard.".to_string(),
            Message::ClipboardUnavailable => "Could not reach the system clipboard.".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageQuotaExceeded => "Unable to save: local storage quota exceeded.".to_string(),
            Message::StorageSaveFailed => "Error saving data.".to_string(),
        };
        write!(f, "{}", text)
    }
}
