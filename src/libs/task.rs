//! Task model and the pure projections derived from it.
//!
//! Tasks are stored in insertion order inside the user document. Everything
//! order-related here is presentation only: [`display_order`] never touches
//! the stored sequence, and [`upcoming`] is a read-only filter.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

/// Soft cap after which adding yet another task asks for confirmation.
pub const TASK_VOLUME_THRESHOLD: usize = 2000;

/// How many tasks the upcoming view shows at most.
pub const UPCOMING_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Study,
    Work,
    Personal,
    Health,
    #[default]
    Other,
}

impl Category {
    /// Unknown stored values fall back to `Other`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "study" => Category::Study,
            "work" => Category::Work,
            "personal" => Category::Personal,
            "health" => Category::Health,
            _ => Category::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Study => "study",
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Study => "📚",
            Category::Work => "💼",
            Category::Personal => "💖",
            Category::Health => "🏃",
            Category::Other => "✨",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Unknown stored values rank lowest, so they sort like `Low`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Low,
        }
    }

    /// Sort rank: high before medium before low.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub cat: Category,
    pub note: String,
    pub date: Option<String>,
    pub priority: Priority,
    pub done: bool,
}

impl Task {
    pub fn new(id: u64, title: &str, cat: Category, note: &str, date: Option<String>, priority: Priority) -> Self {
        Task {
            id,
            title: title.to_string(),
            cat,
            note: note.to_string(),
            date,
            priority,
            done: false,
        }
    }

    /// Decodes one stored task record, field by field with defaults.
    ///
    /// Returns `None` for records that are not objects or carry no string
    /// title; those are skipped rather than failing the whole document.
    pub fn from_value(value: &Value) -> Option<Task> {
        let record = value.as_object()?;
        let title = record.get("title")?.as_str()?;
        Some(Task {
            id: record.get("id").and_then(Value::as_u64).unwrap_or(0),
            title: title.to_string(),
            cat: record.get("cat").and_then(Value::as_str).map(Category::from_str_lossy).unwrap_or_default(),
            note: record.get("note").and_then(Value::as_str).unwrap_or_default().to_string(),
            date: record.get("date").and_then(Value::as_str).map(str::to_string),
            priority: record.get("priority").and_then(Value::as_str).map(Priority::from_str_lossy).unwrap_or_default(),
            done: record.get("done").and_then(Value::as_bool).unwrap_or(false),
        })
    }
}

/// Presentation order: pending before done, dated pairs by date ascending,
/// then priority rank. A dated task compared against an undated one falls
/// through to priority, which keeps their relative order in the common case.
///
/// That comparison is intentionally not a total order, so the ordering is
/// applied as a stable insertion pass instead of `sort_by`.
pub fn display_order<'a, I>(tasks: I) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut ordered: Vec<&Task> = Vec::new();
    for task in tasks {
        let at = ordered
            .iter()
            .rposition(|placed| display_cmp(placed, task) != Ordering::Greater)
            .map(|index| index + 1)
            .unwrap_or(0);
        ordered.insert(at, task);
    }
    ordered
}

fn display_cmp(a: &Task, b: &Task) -> Ordering {
    if a.done != b.done {
        return if a.done { Ordering::Greater } else { Ordering::Less };
    }
    if let (Some(date_a), Some(date_b)) = (&a.date, &b.date) {
        if date_a != date_b {
            // Lexicographic on YYYY-MM-DD is chronological
            return date_a.cmp(date_b);
        }
    }
    a.priority.rank().cmp(&b.priority.rank())
}

/// Pending tasks due today or later, date ascending, first ten.
///
/// `today` must be in zero-padded `YYYY-MM-DD` form so plain string
/// comparison is chronological.
pub fn upcoming<'a>(tasks: &'a [Task], today: &str) -> Vec<&'a Task> {
    let mut list: Vec<&Task> = tasks
        .iter()
        .filter(|task| !task.done && task.date.as_deref().is_some_and(|date| date >= today))
        .collect();
    list.sort_by(|a, b| a.date.cmp(&b.date));
    list.truncate(UPCOMING_LIMIT);
    list
}
