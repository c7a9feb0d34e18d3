//! Integration-level unit tests for the SettingsEngine public API.

use shelfmark::services::settings_engine::{SettingsEngine, SettingsEngineTrait, DATABASE_FILE_NAME};
use shelfmark::types::bookmark::SortMode;
use shelfmark::types::errors::SettingsError;
use shelfmark::types::settings::ShelfSettings;
use tempfile::TempDir;

/// Helper: a SettingsEngine whose file lives in `dir`.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load().unwrap(), ShelfSettings::default());
    assert_eq!(engine.get_settings().view.default_sort, SortMode::Important);
    assert_eq!(engine.get_settings().logging.level, "info");
}

#[test]
fn test_set_value_persists_immediately() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.set_value("view.show_archive", serde_json::json!(true)).unwrap();
    engine.set_value("logging.level", serde_json::json!("debug")).unwrap();

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert!(settings.view.show_archive);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    assert!(matches!(
        engine.set_value("view.colour", serde_json::json!("red")),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_rejects_malformed_paths() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    for key in ["view.", ".view", "view..show_archive", "view/show_archive", "logging.level.x"] {
        assert!(
            matches!(
                engine.set_value(key, serde_json::json!(true)),
                Err(SettingsError::InvalidKey(_))
            ),
            "key {:?} should be rejected",
            key
        );
    }
    assert_eq!(engine.get_settings(), &ShelfSettings::default());
}

#[test]
fn test_set_value_replaces_optional_leaf() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("storage.database_path", serde_json::json!("/tmp/shelf.db"))
        .unwrap();
    assert_eq!(engine.get_settings().storage.database_path.as_deref(), Some("/tmp/shelf.db"));
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ broken").unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"view": {"default_sort": "alphabetical-asc", "show_archive": false}}"#,
    )
    .unwrap();
    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.view.default_sort, SortMode::AlphabeticalAsc);
    assert_eq!(settings.logging, Default::default());
    assert!(engine.database_path().ends_with(DATABASE_FILE_NAME));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.set_value("view.default_sort", serde_json::json!("date-oldest")).unwrap();
    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), ShelfSettings::default());
}
