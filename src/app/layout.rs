//! Screen geometry shared by hit-testing and rendering.
//!
//! Rows are 0-based pane lines. The host screen is laid out as:
//!
//! ```text
//! row 0          blank
//! row 1          title
//! row 2          border
//! row rows/2     [ Show Bottom Sheet ]
//! row rows-2     border
//! row rows-1     footer
//! ```
//!
//! While the sheet is mounted, every row from `sheet_top` down belongs to the
//! panel and every row above it to the backdrop.

use super::pointer::HitTarget;
use crate::sheet::SheetSnapshot;

/// Row of the host title.
pub const TITLE_ROW: usize = 1;
/// Row of the border under the title.
pub const TITLE_BORDER_ROW: usize = 2;
/// Label of the host open button.
pub const BUTTON_LABEL: &str = "[ Show Bottom Sheet ]";

/// Horizontal extent of the open button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRect {
    /// Row of the button.
    pub row: usize,
    /// First column (inclusive).
    pub col_start: usize,
    /// Last column (exclusive).
    pub col_end: usize,
}

impl ButtonRect {
    fn contains(&self, row: usize, col: usize) -> bool {
        row == self.row && (self.col_start..self.col_end).contains(&col)
    }
}

/// Geometry of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Pane height.
    pub rows: usize,
    /// Pane width.
    pub cols: usize,
    /// First panel row, `None` while the sheet is unmounted.
    ///
    /// Equals `rows` when the sheet is mounted but fully translated out.
    pub sheet_top: Option<usize>,
    /// Host open button.
    pub button: ButtonRect,
}

impl Layout {
    /// Computes the layout for a pane size and optional sheet snapshot.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn compute(rows: usize, cols: usize, sheet: Option<&SheetSnapshot>) -> Self {
        let sheet_top = sheet.filter(|s| s.visible).map(|s| {
            let top = (rows as f64 - s.height + s.offset).round();
            top.clamp(0.0, rows as f64) as usize
        });

        let label_len = BUTTON_LABEL.chars().count();
        let col_start = cols.saturating_sub(label_len) / 2;
        let button = ButtonRect {
            row: rows / 2,
            col_start,
            col_end: (col_start + label_len).min(cols),
        };

        Self {
            rows,
            cols,
            sheet_top,
            button,
        }
    }

    /// Number of backdrop rows above the panel (0 while unmounted).
    #[must_use]
    pub fn backdrop_rows(&self) -> usize {
        self.sheet_top.unwrap_or(0)
    }

    /// Resolves a pointer position. Positions outside the pane hit nothing.
    #[must_use]
    pub fn hit_test(&self, line: isize, col: usize) -> Option<HitTarget> {
        let row = usize::try_from(line).ok()?;
        if row >= self.rows || col >= self.cols {
            return None;
        }

        match self.sheet_top {
            Some(top) if row >= top => Some(HitTarget::Sheet),
            Some(_) => Some(HitTarget::Backdrop),
            None if self.button.contains(row, col) => Some(HitTarget::Button),
            None => Some(HitTarget::Host),
        }
    }
}
