// Shelfmark platform paths for Linux
// Config: ~/.config/shelfmark
// Data:   ~/.local/share/shelfmark

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/shelfmark` if set, otherwise `~/.config/shelfmark`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("shelfmark"),
        _ => home_dir().join(".config").join("shelfmark"),
    }
}

/// Uses `$XDG_DATA_HOME/shelfmark` if set, otherwise `~/.local/share/shelfmark`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("shelfmark"),
        _ => home_dir().join(".local").join("share").join("shelfmark"),
    }
}
