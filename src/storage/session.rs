//! Session pointer and global theme fallback.
//!
//! Two small files next to the user documents: `session` holds the last
//! signed-in user name, `theme` holds the theme used before any sign-in.
//! Both are plain text, both are optional, and a missing or garbled file is
//! the same as no value.

use super::data_storage::DataStorage;
use crate::libs::document::Theme;
use std::{fs, io};

const SESSION_FILE: &str = "session";
const THEME_FILE: &str = "theme";

pub struct Session;

impl Session {
    /// The currently signed-in user, if any.
    pub fn current() -> Option<String> {
        let path = DataStorage::new().get_path(SESSION_FILE).ok()?;
        let raw = fs::read_to_string(path).ok()?;
        let name = raw.trim().to_string();
        (!name.is_empty()).then_some(name)
    }

    pub fn set(name: &str) -> io::Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        fs::write(path, name)
    }

    pub fn clear() -> io::Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        match fs::remove_file(path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    /// Theme used before any sign-in. Defaults to light.
    pub fn global_theme() -> Theme {
        DataStorage::new()
            .get_path(THEME_FILE)
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|raw| if raw.trim() == "dark" { Theme::Dark } else { Theme::Light })
            .unwrap_or_default()
    }

    pub fn set_global_theme(theme: Theme) -> io::Result<()> {
        let path = DataStorage::new().get_path(THEME_FILE)?;
        fs::write(path, theme.label())
    }
}
