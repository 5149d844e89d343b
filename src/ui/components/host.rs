//! Host screen rows: blanks, separators and the open button.

use super::HostPalette;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ButtonInfo;

/// Fills a row with the host background.
pub fn render_blank(out: &mut String, row: usize, palette: &HostPalette, cols: usize) {
    position_cursor(out, row, 1);
    out.push_str(&Theme::bg(&palette.base_bg));
    out.push_str(&" ".repeat(cols));
    out.push_str(Theme::reset());
}

/// Renders a horizontal border line across the row.
pub fn render_border(out: &mut String, row: usize, palette: &HostPalette, cols: usize) {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&palette.border));
    out.push_str(&Theme::bg(&palette.base_bg));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
}

/// Renders the open button row.
///
/// A disabled button (sheet already shown) keeps its label but loses its
/// fill.
pub fn render_button(
    out: &mut String,
    row: usize,
    button: &ButtonInfo,
    palette: &HostPalette,
    cols: usize,
) {
    let col = button.col.min(cols);
    let label = truncate(&button.label, cols - col);
    let label_len = label.chars().count();

    position_cursor(out, row, 1);
    out.push_str(&Theme::bg(&palette.base_bg));
    out.push_str(&" ".repeat(col));

    if button.enabled {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&palette.button_fg));
        out.push_str(&Theme::bg(&palette.button_bg));
    } else {
        out.push_str(&Theme::fg(&palette.text_dim));
    }
    out.push_str(&label);
    out.push_str(Theme::reset());

    out.push_str(&Theme::bg(&palette.base_bg));
    out.push_str(&" ".repeat(cols - col - label_len));
    out.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(enabled: bool) -> ButtonInfo {
        ButtonInfo {
            label: "[ Show Bottom Sheet ]".to_string(),
            row: 5,
            col: 4,
            enabled,
        }
    }

    #[test]
    fn button_row_contains_label() {
        let palette = HostPalette::new(&Theme::default(), 0.0);
        let mut out = String::new();
        render_button(&mut out, 6, &button(true), &palette, 40);
        assert!(out.starts_with("\u{1b}[6;1H"));
        assert!(out.contains("[ Show Bottom Sheet ]"));
        assert!(out.contains(&Theme::bg(&palette.button_bg)));
    }

    #[test]
    fn disabled_button_has_no_fill() {
        let palette = HostPalette::new(&Theme::default(), 0.0);
        let mut out = String::new();
        render_button(&mut out, 6, &button(false), &palette, 40);
        assert!(!out.contains(&Theme::bg(&palette.button_bg)));
    }

    #[test]
    fn button_is_clipped_on_narrow_panes() {
        let palette = HostPalette::new(&Theme::default(), 0.0);
        let mut out = String::new();
        render_button(&mut out, 1, &button(true), &palette, 8);
        assert!(out.contains("[ Sh"));
        assert!(!out.contains("[ Sho"));
    }
}
