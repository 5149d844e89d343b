//! Header component renderer.
//!
//! This module renders the host title bar with centered text.

use super::HostPalette;
use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row (1-indexed).
///
/// Displays the title centered horizontally with bold styling. Pads the line
/// to fill the entire pane width.
pub fn render_header(
    out: &mut String,
    row: usize,
    header: &HeaderInfo,
    palette: &HostPalette,
    cols: usize,
) {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&palette.header_fg));
    out.push_str(&Theme::bg(&palette.base_bg));
    out.push_str(&centered(&header.title, cols));
    out.push_str(Theme::reset());
}
