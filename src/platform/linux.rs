// linkshort platform paths for Linux
// Config: ~/.config/linkshort
// Data:   ~/.local/share/linkshort

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for linkshort on Linux.
/// Uses `$XDG_CONFIG_HOME/linkshort` if set, otherwise `~/.config/linkshort`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("linkshort")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("linkshort")
    }
}

/// Returns the data directory for linkshort on Linux.
/// Uses `$XDG_DATA_HOME/linkshort` if set, otherwise `~/.local/share/linkshort`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("linkshort")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("linkshort")
    }
}
