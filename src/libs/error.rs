//! Application error taxonomy.
//!
//! Session and validation failures abort the triggering operation with no
//! state change. Storage failures lose only the "persisted" guarantee; the
//! caller keeps whatever the user typed. A missing task id is not an error
//! anywhere in the application, operations treat it as a silent no-op.

use crate::libs::messages::Message;
use crate::storage::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", Message::NotSignedIn)]
    NotSignedIn,
    #[error("{0}")]
    Validation(Message),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{}", Message::InvalidSnapshot)]
    InvalidImport,
}

impl AppError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, AppError::Store(StoreError::QuotaExceeded(_)))
    }
}
