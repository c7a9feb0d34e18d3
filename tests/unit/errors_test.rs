use shelfmark::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display() {
    let err = StorageError::DatabaseError("disk full".to_string());
    assert_eq!(err.to_string(), "Storage database error: disk full");
}

#[test]
fn storage_error_converts_into_bookmark_error() {
    let err: BookmarkError = StorageError::DatabaseError("locked".to_string()).into();
    assert!(matches!(err, BookmarkError::StorageError(_)));
    assert_eq!(
        err.to_string(),
        "Bookmark storage error: Storage database error: locked"
    );
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::Validation("Please enter a valid URL".to_string()).to_string(),
        "Invalid bookmark: Please enter a valid URL"
    );
    assert_eq!(
        BookmarkError::NotFound("Docs <https://example.com>".to_string()).to_string(),
        "Bookmark not found: Docs <https://example.com>"
    );
    assert_eq!(
        BookmarkError::CorruptData("bookmarks: expected value".to_string()).to_string(),
        "Corrupt bookmark data: bookmarks: expected value"
    );
}

#[test]
fn bookmark_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(BookmarkError::NotFound("x".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("view.colour".to_string()).to_string(),
        "Invalid settings key: view.colour"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}
