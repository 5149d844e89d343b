//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`.
//! These helpers map user-facing paths (`~/...`) and the plugin's data
//! location into that mount.

use std::path::PathBuf;

/// File name of the OTLP trace export inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "sheetpane-otlp.json";

/// Returns the data directory for sheetpane files.
///
/// Located at `/host/.local/share/zellij/sheetpane`. `/host` points to the
/// cwd of the last focused terminal, so this usually resolves to
/// `~/.local/share/zellij/sheetpane` on the host.
///
/// # Examples
///
/// ```
/// use sheetpane::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/sheetpane");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("sheetpane")
}

/// Path of the OTLP trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use sheetpane::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
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
