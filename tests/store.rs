#[cfg(test)]
mod tests {
    use planpro::libs::document::{Theme, UserDocument};
    use planpro::libs::error::AppError;
    use planpro::libs::task::{Category, Priority, Task};
    use planpro::storage::store::{StoreError, UserStore};
    use std::io;
    use std::path::PathBuf;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // One data dir per test process; tests are isolated by user name
    static TEMP_DIR: OnceLock<TempDir> = OnceLock::new();

    struct StoreTestContext;

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = TEMP_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext
        }
    }

    fn data_dir() -> PathBuf {
        let base = match std::env::consts::OS {
            "windows" => std::env::var("LOCALAPPDATA").unwrap(),
            "macos" => std::env::var("HOME").unwrap() + "/Library/Application Support",
            _ => std::env::var("HOME").unwrap() + "/.local/share",
        };
        PathBuf::from(base).join("planpro")
    }

    fn write_raw(name: &str, raw: &str) {
        let dir = data_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("user_{}.json", name)), raw).unwrap();
    }

    fn sample_task(id: u64, title: &str) -> Task {
        Task::new(id, title, Category::Work, "a note", Some("2024-06-01".to_string()), Priority::High)
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_load_round_trip(_ctx: &mut StoreTestContext) {
        let store = UserStore::new();
        let document = UserDocument {
            tasks: vec![sample_task(1, "First"), sample_task(2, "Second")],
            journal: "dear diary".to_string(),
            theme: Theme::Dark,
        };

        store.save("roundtrip_user", &document).unwrap();
        assert_eq!(store.load("roundtrip_user"), document);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_user_yields_default(_ctx: &mut StoreTestContext) {
        let store = UserStore::new();
        let document = store.load("nobody_here");
        assert!(document.tasks.is_empty());
        assert_eq!(document.journal, "");
        assert_eq!(document.theme, Theme::Light);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unparsable_payload_yields_default(_ctx: &mut StoreTestContext) {
        write_raw("garbled_user", "{{{ not json at all");
        let store = UserStore::new();
        assert_eq!(store.load("garbled_user"), UserDocument::default());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_non_object_payload_yields_default(_ctx: &mut StoreTestContext) {
        write_raw("array_user", "[1, 2, 3]");
        let store = UserStore::new();
        assert_eq!(store.load("array_user"), UserDocument::default());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_wrong_typed_fields_defaulted_independently(_ctx: &mut StoreTestContext) {
        write_raw("mixed_user", r#"{"tasks": 5, "journal": "kept", "theme": []}"#);
        let store = UserStore::new();
        let document = store.load("mixed_user");
        assert!(document.tasks.is_empty());
        assert_eq!(document.journal, "kept");
        assert_eq!(document.theme, Theme::Light);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_bad_task_records_skipped_individually(_ctx: &mut StoreTestContext) {
        write_raw(
            "partial_user",
            r#"{
                "tasks": [
                    {"id": 7, "title": "survivor"},
                    42,
                    {"note": "no title here"},
                    {"id": 8, "title": "also fine", "cat": "nonsense", "priority": "urgent", "done": true}
                ],
                "journal": "j",
                "theme": "dark"
            }"#,
        );
        let store = UserStore::new();
        let document = store.load("partial_user");

        assert_eq!(document.tasks.len(), 2);
        assert_eq!(document.tasks[0].id, 7);
        assert_eq!(document.tasks[0].title, "survivor");
        assert_eq!(document.tasks[0].cat, Category::Other);
        assert_eq!(document.tasks[0].priority, Priority::Medium);
        assert!(!document.tasks[0].done);
        // Unknown category and priority strings degrade, they do not reject
        assert_eq!(document.tasks[1].cat, Category::Other);
        assert_eq!(document.tasks[1].priority, Priority::Low);
        assert!(document.tasks[1].done);
        assert_eq!(document.theme, Theme::Dark);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_resave_replaces_whole_document(_ctx: &mut StoreTestContext) {
        let store = UserStore::new();
        let first = UserDocument {
            tasks: vec![sample_task(1, "first version")],
            journal: "v1".to_string(),
            theme: Theme::Light,
        };
        store.save("stable_user", &first).unwrap();

        let second = UserDocument {
            tasks: vec![sample_task(2, "second version")],
            journal: "v2".to_string(),
            theme: Theme::Dark,
        };
        store.save("stable_user", &second).unwrap();

        assert_eq!(store.load("stable_user"), second);
    }

    #[test]
    fn test_quota_classification() {
        // ENOSPC and the storage-full kinds become QuotaExceeded
        let enospc = StoreError::from_io(io::Error::from_raw_os_error(28));
        assert!(matches!(enospc, StoreError::QuotaExceeded(_)));
        let full = StoreError::from_io(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
        assert!(matches!(full, StoreError::QuotaExceeded(_)));

        // Anything else stays a generic write failure
        let denied = StoreError::from_io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        assert!(matches!(denied, StoreError::WriteFailed(_)));

        let quota: AppError = StoreError::from_io(io::Error::from_raw_os_error(28)).into();
        assert!(quota.is_quota_exceeded());
        let write: AppError = StoreError::from_io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")).into();
        assert!(!write.is_quota_exceeded());
    }
}
