use serde::{Deserialize, Serialize};

use super::bookmark::SortMode;

/// Top-level settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShelfSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub view: ViewSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the bookmark database lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// Explicit database file. `None` means `<data dir>/shelfmark.db`.
    pub database_path: Option<String>,
}

/// Initial view state for a new session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewSettings {
    pub default_sort: SortMode,
    pub show_archive: bool,
}

/// Log output configuration. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
