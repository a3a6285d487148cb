//! Error types for the calendar library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all calendar operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Storage connection or query errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// No article or action exists with the given ID
    #[error("No planned item with ID '{id}'")]
    ItemNotFound { id: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Draft generation request failures (transport, auth, or response shape)
    #[error("Draft generation failed: {message}")]
    DraftGeneration { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CalendarError {
    /// Creates a storage error with a message and its rusqlite source.
    pub fn storage(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a draft generation error.
    pub fn draft(message: impl Into<String>) -> Self {
        Self::DraftGeneration {
            message: message.into(),
        }
    }
}

/// Extension trait for rusqlite Results to attach context while converting
/// to [`CalendarError`].
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CalendarError::storage(message, e))
    }
}

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;
