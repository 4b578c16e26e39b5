// Session pointer and global theme state are shared files, so the whole
// flow runs as one sequential test instead of racing parallel tests.
#[cfg(test)]
mod tests {
    use planpro::libs::app::App;
    use planpro::libs::document::Theme;
    use planpro::libs::error::AppError;
    use planpro::storage::session::Session;
    use planpro::storage::store::UserStore;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static TEMP_DIR: OnceLock<TempDir> = OnceLock::new();

    struct SessionTestContext;

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = TEMP_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_session_and_theme_flow(_ctx: &mut SessionTestContext) {
        // Empty names never start a session
        assert!(matches!(App::login("   "), Err(AppError::Validation(_))));
        assert!(Session::current().is_none());

        // First sign-in creates the document and the session pointer
        let (app, theme) = App::login("flow_user").unwrap();
        assert_eq!(theme, Theme::Light);
        assert_eq!(Session::current().as_deref(), Some("flow_user"));
        assert!(UserStore::new().exists("flow_user"));
        assert!(App::current().is_ok());

        // A signed-out theme choice only touches the global fallback
        Session::set_global_theme(Theme::Dark).unwrap();
        assert_eq!(Session::global_theme(), Theme::Dark);
        assert_eq!(app.document().theme, Theme::Light);

        // Existing users keep their stored theme over the global fallback
        let (_, theme) = App::login("flow_user").unwrap();
        assert_eq!(theme, Theme::Light);

        // Brand new users inherit the global fallback
        let (fresh, theme) = App::login("fresh_user").unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(fresh.document().theme, Theme::Dark);

        // Toggling while signed in persists into the user document only
        let (app, _) = App::login("flow_user").unwrap();
        assert_eq!(app.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(app.document().theme, Theme::Dark);
        app.set_theme(Theme::Light).unwrap();
        assert_eq!(app.document().theme, Theme::Light);
        assert_eq!(Session::global_theme(), Theme::Dark);

        // Signing out clears the pointer and reports the fallback theme
        assert_eq!(App::logout().unwrap(), Theme::Dark);
        assert!(Session::current().is_none());
        assert!(matches!(App::current(), Err(AppError::NotSignedIn)));

        // Logout is idempotent
        assert!(App::logout().is_ok());
    }
}
