//! Error types for the sheetpane plugin.
//!
//! The sheet core itself cannot fail: its inputs are total and out-of-range
//! values are clamped. Errors only come from the ambient layers (theme
//! files, configuration, mounting against an unusable viewport).

use thiserror::Error;

/// The main error type for sheetpane operations.
#[derive(Debug, Error)]
pub enum SheetpaneError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. reading a
    /// theme file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid, or the host reported a viewport the sheet
    /// cannot be mounted in.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for sheetpane operations.
pub type Result<T> = std::result::Result<T, SheetpaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(read(), Err(SheetpaneError::Io(_))));
    }

    #[test]
    fn messages_name_the_layer() {
        let err = SheetpaneError::Config("sheet_height must be in (0, 1]".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: sheet_height must be in (0, 1]"
        );
    }
}
