// Accessibility widget platform paths
// Resolves where the desktop host keeps its config file and settings database.
//
// - Linux:   $XDG_CONFIG_HOME/accessibility-widget, $XDG_DATA_HOME/accessibility-widget
// - macOS:   ~/Library/Application Support/AccessibilityWidget
// - Windows: %APPDATA%/AccessibilityWidget

use std::env;
use std::path::PathBuf;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const APP_DIR: &str = "accessibility-widget";

#[cfg(any(target_os = "macos", target_os = "windows"))]
const APP_DIR: &str = "AccessibilityWidget";

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the directory holding `config.json`.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        windows_appdata().join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".config").join(APP_DIR),
        }
    }
}

/// Returns the directory holding the settings database.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        windows_appdata().join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".local").join("share").join(APP_DIR),
        }
    }
}

#[cfg(target_os = "windows")]
fn windows_appdata() -> PathBuf {
    PathBuf::from(
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    )
}

/// Path of the SQLite file the desktop host persists settings in.
pub fn get_database_path() -> PathBuf {
    get_data_dir().join("settings.db")
}
