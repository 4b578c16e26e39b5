#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use planpro::libs::app::{snapshot_file_name, App, TaskDraft};
    use planpro::libs::document::Theme;
    use planpro::libs::error::AppError;
    use planpro::libs::task::{Category, Priority};
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static TEMP_DIR: OnceLock<TempDir> = OnceLock::new();

    struct BackupTestContext;

    impl TestContext for BackupTestContext {
        fn setup() -> Self {
            let temp_dir = TEMP_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            BackupTestContext
        }
    }

    fn draft(title: &str, date: Option<&str>) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            cat: Category::Study,
            note: "note".to_string(),
            date: date.map(str::to_string),
            priority: Priority::High,
        }
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_import_merges_field_by_field(_ctx: &mut BackupTestContext) {
        let (app, _) = App::login("merge_user").unwrap();
        app.add_task(draft("keep me", Some("2024-06-01"))).unwrap();
        app.set_journal("original".to_string()).unwrap();

        let summary = app
            .import_snapshot(r#"{"tasks": "not-an-array", "journal": "hello", "theme": "dark"}"#)
            .unwrap();

        assert!(!summary.tasks_replaced);
        assert!(summary.journal_replaced);
        assert!(summary.theme_replaced);

        let document = app.document();
        assert_eq!(document.tasks.len(), 1);
        assert_eq!(document.tasks[0].title, "keep me");
        assert_eq!(document.journal, "hello");
        assert_eq!(document.theme, Theme::Dark);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_import_replaces_tasks_only_for_arrays(_ctx: &mut BackupTestContext) {
        let (app, _) = App::login("array_merge_user").unwrap();
        app.add_task(draft("old task", None)).unwrap();
        app.set_journal("kept journal".to_string()).unwrap();

        let summary = app.import_snapshot(r#"{"tasks": [{"id": 9, "title": "imported"}]}"#).unwrap();
        assert!(summary.tasks_replaced);
        assert!(!summary.journal_replaced);
        assert!(!summary.theme_replaced);

        let document = app.document();
        assert_eq!(document.tasks.len(), 1);
        assert_eq!(document.tasks[0].id, 9);
        assert_eq!(document.tasks[0].title, "imported");
        assert_eq!(document.tasks[0].cat, Category::Other);
        assert_eq!(document.tasks[0].priority, Priority::Medium);
        assert_eq!(document.journal, "kept journal");
        assert_eq!(document.theme, Theme::Light);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_import_rejects_invalid_payloads(_ctx: &mut BackupTestContext) {
        let (app, _) = App::login("reject_user").unwrap();
        app.add_task(draft("untouched", None)).unwrap();
        let before = app.document();

        assert!(matches!(app.import_snapshot("[1, 2, 3]"), Err(AppError::InvalidImport)));
        assert!(matches!(app.import_snapshot("not json"), Err(AppError::InvalidImport)));
        assert!(matches!(app.import_snapshot("\"just a string\""), Err(AppError::InvalidImport)));

        assert_eq!(app.document(), before);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_export_then_import_round_trips(_ctx: &mut BackupTestContext) {
        let (app, _) = App::login("export_user").unwrap();
        app.add_task(draft("Write report", Some("2024-06-03"))).unwrap();
        app.add_task(draft("No due date", None)).unwrap();
        app.set_journal("a full journal entry".to_string()).unwrap();
        app.set_theme(Theme::Dark).unwrap();
        let original = app.document();

        let path = std::env::temp_dir().join("planpro_export_roundtrip.json");
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let written = app.export_snapshot(Some(path.clone()), today).unwrap();
        assert_eq!(written, path);

        let payload = std::fs::read_to_string(&path).unwrap();
        app.import_snapshot(&payload).unwrap();
        assert_eq!(app.document(), original);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_snapshot_file_name_convention() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(snapshot_file_name("mia", today), "planpro_mia_2024-06-01.json");
    }
}
