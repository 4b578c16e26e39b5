#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SignedIn(String),
    SignedOut,
    UsernameRequired,
    NotSignedIn,
    NotSignedInHint,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskMarkedDone(String),
    TaskMarkedPending(String),
    TaskNotFoundWithId(u64),
    TasksDeletedCount(usize),
    TasksHeader,
    NoTasksYet,
    NoTasksForDate(String),
    NoDoneTasks,
    NoChangesRequested,
    TaskTitleRequired,
    TaskTitleKept,
    InvalidDate(String),
    ConfirmDeleteTask(String),
    ConfirmClearDone(usize),
    ConfirmLargeTaskList(usize),

    // === JOURNAL MESSAGES ===
    JournalSaved,
    JournalCleared,
    JournalEmpty,
    JournalHeader,
    ConfirmClearJournal,

    // === VIEW MESSAGES ===
    CalendarHeader(String),
    SelectedDayHeader(String),
    InvalidCalendarDay(u32, u32), // day, days in month
    UpcomingHeader,
    NoUpcomingTasks,
    ProgressLabel(usize, usize), // done, total

    // === BACKUP MESSAGES ===
    BackupWritten(String),
    RestoreCompleted,
    InvalidSnapshot,

    // === THEME MESSAGES ===
    ThemeSet(String),
    GlobalThemeSet(String),

    // === QUOTE MESSAGES ===
    QuoteCopied,
    ClipboardUnavailable,

    // === STORAGE MESSAGES ===
    StorageQuotaExceeded,
    StorageSaveFailed,
}
