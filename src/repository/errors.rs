//! Storage error types
//!
//! Storage failures sit outside the domain's error taxonomy. They propagate
//! unchanged through the service and surface as a server error.

use thiserror::Error;

/// Result type for repository operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage collaborator errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A persisted row could not be mapped onto an employee
    #[error("Invalid persisted row: {0}")]
    InvalidRow(String),

    /// The in-memory table lock was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    Poisoned,
}

impl StorageError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Database(_) => "EMP_STORAGE_DATABASE",
            StorageError::InvalidRow(_) => "EMP_STORAGE_INVALID_ROW",
            StorageError::Poisoned => "EMP_STORAGE_POISONED",
        }
    }
}
