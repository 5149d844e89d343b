//! Shared rendering utilities and helpers.
//!
//! Components write ANSI output into a `String` frame buffer rather than
//! straight to stdout, so a whole frame is emitted with one `print!` and can
//! be inspected in tests.
//!
//! # Example
//!
//! ```rust
//! use sheetpane::ui::helpers::{centered, position_cursor};
//!
//! let mut out = String::new();
//! position_cursor(&mut out, 5, 1);
//! assert_eq!(out, "\u{1b}[5;1H");
//!
//! assert_eq!(centered("ab", 6), "  ab  ");
//! ```

use std::fmt::Write;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `cols` characters.
#[must_use]
pub fn truncate(text: &str, cols: usize) -> String {
    text.chars().take(cols).collect()
}

/// Centers `text` in exactly `cols` columns, truncating if needed.
///
/// When the padding cannot split evenly, the right side gets the extra
/// column.
#[must_use]
pub fn centered(text: &str, cols: usize) -> String {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
