//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use super::HostPalette;
use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row (1-indexed).
///
/// If the help text exceeds the pane width, it is truncated to fit.
pub fn render_footer(
    out: &mut String,
    row: usize,
    footer: &FooterInfo,
    palette: &HostPalette,
    cols: usize,
) {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&palette.text_dim));
    out.push_str(&Theme::bg(&palette.base_bg));
    out.push_str(&centered(&footer.keybindings, cols));
    out.push_str(Theme::reset());
}
