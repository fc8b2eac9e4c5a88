// linkshort platform paths for Windows
// Config: %APPDATA%/LinkShort
// Data:   %APPDATA%/LinkShort

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for linkshort on Windows.
/// `%APPDATA%/LinkShort`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("LinkShort")
}

/// Returns the data directory for linkshort on Windows.
/// `%APPDATA%/LinkShort`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("LinkShort")
}
