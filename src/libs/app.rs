//! Session-bound application controller.
//!
//! `App` replaces the original page's global mutable state with one explicit
//! object: the signed-in user plus a handle to the store. Every mutating
//! operation runs the same cycle the original event handlers did: load the
//! whole document, change it in memory, write the whole document back. A
//! failed write loses only the persistence of that one mutation; nothing on
//! disk is partially updated.

use crate::libs::document::{ImportSummary, Theme, UserDocument};
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::task::{Category, Priority, Task};
use crate::msg_debug;
use crate::storage::session::Session;
use crate::storage::store::{StoreError, UserStore};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Fields for a task to be created. The id is assigned by the document.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub cat: Category,
    pub note: String,
    pub date: Option<String>,
    pub priority: Priority,
}

/// One structured edit request: only supplied fields apply.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub note: Option<String>,
    /// `Some("")` clears the date.
    pub date: Option<String>,
    pub priority: Option<Priority>,
    pub cat: Option<Category>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.note.is_none() && self.date.is_none() && self.priority.is_none() && self.cat.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub task: Task,
    /// True when a supplied title was empty after trimming and was ignored.
    pub title_ignored: bool,
}

pub struct App {
    store: UserStore,
    pub user: String,
}

impl App {
    /// Binds to the signed-in user, or fails with `NotSignedIn`.
    pub fn current() -> Result<Self, AppError> {
        let user = Session::current().ok_or(AppError::NotSignedIn)?;
        Ok(App { store: UserStore::new(), user })
    }

    /// Signs in as `name`, creating the user's document on first sign-in.
    ///
    /// The session switch itself only requires the pointer write; a failure
    /// to materialize the new document is logged and swallowed. Returns the
    /// app plus the theme now in effect (stored theme for an existing user,
    /// global fallback for a brand new one, light otherwise).
    pub fn login(name: &str) -> Result<(Self, Theme), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(Message::UsernameRequired));
        }
        Session::set(name).map_err(StoreError::WriteFailed)?;
        let store = UserStore::new();
        let existed = store.exists(name);
        let mut document = store.load(name);
        if !existed {
            document.theme = Session::global_theme();
            if let Err(err) = store.save(name, &document) {
                msg_debug!(format!("could not persist fresh document for '{}': {}", name, err));
            }
        }
        let theme = document.theme;
        Ok((App { store, user: name.to_string() }, theme))
    }

    /// Clears the session pointer and reports the fallback theme now active.
    pub fn logout() -> Result<Theme, AppError> {
        Session::clear().map_err(StoreError::WriteFailed)?;
        Ok(Session::global_theme())
    }

    /// A fresh load of the user's document. Every view starts here.
    pub fn document(&self) -> UserDocument {
        self.store.load(&self.user)
    }

    fn persist(&self, document: &UserDocument) -> Result<(), AppError> {
        self.store.save(&self.user, document).map_err(AppError::from)
    }

    pub fn add_task(&self, draft: TaskDraft) -> Result<Task, AppError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation(Message::TaskTitleRequired));
        }
        let date = draft.date.as_deref().map(canonical_date).transpose()?;
        let mut document = self.document();
        let task = Task::new(document.next_task_id(), title, draft.cat, &draft.note, date, draft.priority);
        document.tasks.push(task.clone());
        self.persist(&document)?;
        Ok(task)
    }

    /// Flips `done` on the matching task. `Ok(None)` when the id is absent.
    pub fn toggle_done(&self, id: u64) -> Result<Option<Task>, AppError> {
        let mut document = self.document();
        let Some(task) = document.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.done = !task.done;
        let toggled = task.clone();
        self.persist(&document)?;
        Ok(Some(toggled))
    }

    /// Applies a structured edit. `Ok(None)` when the id is absent.
    ///
    /// An empty trimmed title leaves the stored title unchanged (flagged in
    /// the outcome); an empty date clears the due date.
    pub fn edit_task(&self, id: u64, patch: TaskPatch) -> Result<Option<EditOutcome>, AppError> {
        let date = match patch.date.as_deref() {
            Some("") => Some(None),
            Some(raw) => Some(Some(canonical_date(raw)?)),
            None => None,
        };
        let mut document = self.document();
        let Some(task) = document.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        let mut title_ignored = false;
        if let Some(title) = &patch.title {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                title_ignored = true;
            } else {
                task.title = trimmed.to_string();
            }
        }
        if let Some(note) = patch.note {
            task.note = note;
        }
        if let Some(date) = date {
            task.date = date;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(cat) = patch.cat {
            task.cat = cat;
        }
        let outcome = EditOutcome { task: task.clone(), title_ignored };
        self.persist(&document)?;
        Ok(Some(outcome))
    }

    /// Removes the matching task. `Ok(None)` when the id is absent.
    pub fn delete_task(&self, id: u64) -> Result<Option<Task>, AppError> {
        let mut document = self.document();
        let Some(index) = document.tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };
        let removed = document.tasks.remove(index);
        self.persist(&document)?;
        Ok(Some(removed))
    }

    /// Removes all completed tasks in one persisted write. Idempotent.
    pub fn clear_done(&self) -> Result<usize, AppError> {
        let mut document = self.document();
        let before = document.tasks.len();
        document.tasks.retain(|task| !task.done);
        let removed = before - document.tasks.len();
        self.persist(&document)?;
        Ok(removed)
    }

    /// Replaces the journal wholesale.
    pub fn set_journal(&self, text: String) -> Result<(), AppError> {
        let mut document = self.document();
        document.journal = text;
        self.persist(&document)
    }

    pub fn clear_journal(&self) -> Result<(), AppError> {
        self.set_journal(String::new())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), AppError> {
        let mut document = self.document();
        document.theme = theme;
        self.persist(&document)
    }

    pub fn toggle_theme(&self) -> Result<Theme, AppError> {
        let mut document = self.document();
        document.theme = document.theme.toggled();
        self.persist(&document)?;
        Ok(document.theme)
    }

    /// Writes a pretty-printed snapshot of the current document.
    pub fn export_snapshot(&self, output: Option<PathBuf>, today: NaiveDate) -> Result<PathBuf, AppError> {
        let document = self.document();
        let payload = document.encode_pretty().map_err(StoreError::from)?;
        let path = output.unwrap_or_else(|| PathBuf::from(snapshot_file_name(&self.user, today)));
        fs::write(&path, payload).map_err(StoreError::WriteFailed)?;
        Ok(path)
    }

    /// Merges a snapshot payload into the current document and persists it.
    pub fn import_snapshot(&self, raw: &str) -> Result<ImportSummary, AppError> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(|_| AppError::InvalidImport)?;
        let mut document = self.document();
        let summary = document.merge_snapshot(&value)?;
        self.persist(&document)?;
        Ok(summary)
    }
}

/// Deterministic backup name: `planpro_<user>_<ISO date>.json`.
pub fn snapshot_file_name(user: &str, today: NaiveDate) -> String {
    format!("planpro_{}_{}.json", user, today.format("%Y-%m-%d"))
}

/// Parses a due date and returns it in the zero-padded ISO form.
///
/// Chrono accepts unpadded components like `2026-1-5`; storing the input
/// verbatim would break every string comparison against padded dates, so
/// the stored form is always re-rendered from the parsed date.
fn canonical_date(value: &str) -> Result<String, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| AppError::Validation(Message::InvalidDate(value.to_string())))
}
