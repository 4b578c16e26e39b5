//! The per-user document and its defensive decoding.
//!
//! One document holds everything planpro knows about a user: the task list,
//! the journal text, and the theme preference. Decoding never rejects a
//! document outright; each field that is missing or wrongly typed is replaced
//! by its default independently of the others, and task records that do not
//! decode are skipped one by one.

use crate::libs::error::AppError;
use crate::libs::task::{Task, TASK_VOLUME_THRESHOLD};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than the exact string `"dark"` decodes to light.
    pub fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct UserDocument {
    pub tasks: Vec<Task>,
    pub journal: String,
    pub theme: Theme,
}

/// Which snapshot fields an import actually replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportSummary {
    pub tasks_replaced: bool,
    pub journal_replaced: bool,
    pub theme_replaced: bool,
}

impl UserDocument {
    /// Decodes a raw stored payload, falling back to the default document
    /// when the payload is not valid JSON at all.
    pub fn decode(raw: &str) -> Self {
        serde_json::from_str::<Value>(raw)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    /// Per-field defensive decoding of a parsed payload.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        UserDocument {
            tasks: fields.get("tasks").and_then(decode_tasks).unwrap_or_default(),
            journal: fields.get("journal").and_then(Value::as_str).unwrap_or_default().to_string(),
            theme: fields.get("theme").map(Theme::from_value).unwrap_or_default(),
        }
    }

    pub fn encode_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Next unique task id: one past the highest id in the document.
    pub fn next_task_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    pub fn over_volume_threshold(&self) -> bool {
        self.tasks.len() > TASK_VOLUME_THRESHOLD
    }

    /// Merges an external snapshot into this document, field by field.
    ///
    /// The payload must be a keyed structure; anything else is an invalid
    /// import and leaves the document untouched. Inside a valid payload each
    /// field is replaced only when the incoming value has the right shape:
    /// `tasks` must be an array, `journal` a string, `theme` exactly
    /// `"dark"`. Fields that fail the check are ignored, not fatal.
    pub fn merge_snapshot(&mut self, value: &Value) -> Result<ImportSummary, AppError> {
        let fields = value.as_object().ok_or(AppError::InvalidImport)?;
        let mut summary = ImportSummary::default();
        if let Some(tasks) = fields.get("tasks").and_then(decode_tasks) {
            self.tasks = tasks;
            summary.tasks_replaced = true;
        }
        if let Some(journal) = fields.get("journal").and_then(Value::as_str) {
            self.journal = journal.to_string();
            summary.journal_replaced = true;
        }
        if fields.get("theme").and_then(Value::as_str) == Some("dark") {
            self.theme = Theme::Dark;
            summary.theme_replaced = true;
        }
        Ok(summary)
    }
}

/// Decodes a stored `tasks` value. `None` unless it is an array; undecodable
/// elements inside an array are dropped individually.
fn decode_tasks(value: &Value) -> Option<Vec<Task>> {
    value.as_array().map(|items| items.iter().filter_map(Task::from_value).collect())
}
