// Shelfmark platform abstraction
// Resolves where settings and the bookmark database live on each OS.
//
// Uses `cfg(target_os)` to pick the platform-specific implementation at compile time.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Overrides the data directory on every platform.
pub const DATA_DIR_ENV: &str = "SHELFMARK_DATA_DIR";

/// Returns the platform-specific configuration directory for Shelfmark.
///
/// - **Linux**: `~/.config/shelfmark` (or `$XDG_CONFIG_HOME/shelfmark`)
/// - **macOS**: `~/Library/Application Support/Shelfmark`
/// - **Windows**: `%APPDATA%/Shelfmark`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the directory holding the bookmark database.
///
/// `$SHELFMARK_DATA_DIR` wins when set; otherwise:
/// - **Linux**: `~/.local/share/shelfmark` (or `$XDG_DATA_HOME/shelfmark`)
/// - **macOS**: `~/Library/Application Support/Shelfmark`
/// - **Windows**: `%APPDATA%/Shelfmark`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
