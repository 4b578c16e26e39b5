//! Durable per-user persistence with defensive decoding.
//!
//! Each user name maps to one JSON file in the planpro data directory,
//! separate from the session pointer and the global theme fallback. Loading
//! never fails: a missing or garbled file simply yields the default
//! document. Saving classifies failures so callers can tell a full disk from
//! any other write problem, and writes go through a temp file plus rename so
//! a failed save leaves the previous contents in place.

use super::data_storage::DataStorage;
use crate::libs::document::UserDocument;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage quota exceeded")]
    QuotaExceeded(#[source] io::Error),
    #[error("failed to write user data")]
    WriteFailed(#[source] io::Error),
    #[error("failed to encode user data")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Classifies an I/O failure: a full disk becomes `QuotaExceeded`,
    /// everything else `WriteFailed`.
    pub fn from_io(err: io::Error) -> Self {
        if is_quota_exceeded(&err) {
            StoreError::QuotaExceeded(err)
        } else {
            StoreError::WriteFailed(err)
        }
    }
}

pub struct UserStore {
    storage: DataStorage,
}

impl UserStore {
    pub fn new() -> Self {
        UserStore { storage: DataStorage::new() }
    }

    /// Loads the document for a user, or the default document when the file
    /// is absent or unreadable. Never errors.
    pub fn load(&self, name: &str) -> UserDocument {
        let Ok(path) = self.storage.get_path(&user_file(name)) else {
            return UserDocument::default();
        };
        match fs::read_to_string(path) {
            Ok(raw) => UserDocument::decode(&raw),
            Err(_) => UserDocument::default(),
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.storage
            .get_path(&user_file(name))
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Serializes and writes the whole document for a user.
    pub fn save(&self, name: &str, document: &UserDocument) -> Result<(), StoreError> {
        let payload = document.encode_pretty()?;
        let path = self.storage.get_path(&user_file(name)).map_err(StoreError::from_io)?;
        let staged = path.with_extension("json.tmp");
        if let Err(err) = fs::write(&staged, payload) {
            let _ = fs::remove_file(&staged);
            return Err(StoreError::from_io(err));
        }
        fs::rename(&staged, &path).map_err(StoreError::from_io)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// File name for a user's document, namespaced by the sanitized user name.
fn user_file(name: &str) -> String {
    format!("user_{}.json", sanitize(name))
}

/// Maps a user name onto a filesystem-safe key.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

fn is_quota_exceeded(err: &io::Error) -> bool {
    // ENOSPC on unix; the kinds cover platforms that report quota directly
    matches!(err.kind(), io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded) || err.raw_os_error() == Some(28)
}
