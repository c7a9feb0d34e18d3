use std::fmt;

// === StorageError ===

/// Errors raised by the persistent key-value service.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === BookmarkError ===

/// Errors related to bookmark and archive operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// User input was rejected (missing name/url, unsupported URL scheme).
    Validation(String),
    /// No record matched the given name and url.
    NotFound(String),
    /// A stored collection could not be parsed.
    CorruptData(String),
    /// The underlying store failed.
    StorageError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::Validation(msg) => write!(f, "Invalid bookmark: {}", msg),
            BookmarkError::NotFound(what) => write!(f, "Bookmark not found: {}", what),
            BookmarkError::CorruptData(msg) => write!(f, "Corrupt bookmark data: {}", msg),
            BookmarkError::StorageError(msg) => write!(f, "Bookmark storage error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

impl From<StorageError> for BookmarkError {
    fn from(e: StorageError) -> Self {
        BookmarkError::StorageError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
