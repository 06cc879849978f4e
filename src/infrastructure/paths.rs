//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`.
//! Configured paths (catalog and theme files) are written the way a user
//! would type them and mapped here.

use std::path::PathBuf;

/// Returns the plugin data directory, `/host/.local/share/zellij/bookconnect`.
///
/// `/host` points to the cwd of the last focused terminal, or the folder
/// where Zellij was started, which is usually the user's home directory.
/// The trace file lives here.
///
/// # Examples
///
/// ```
/// use bookconnect::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/bookconnect"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookconnect")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// # Examples
///
/// ```
/// use bookconnect::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books/catalog.json"), "/host/books/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
