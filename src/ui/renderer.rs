//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Row Rendering**: Walk every pane row and delegate to a component
//!
//! Rows at or below the panel top belong to the sheet. Every other row is a
//! host row, dimmed toward the backdrop colour when the backdrop covers it.
//!
//! # Example
//!
//! ```rust
//! use sheetpane::app::AppState;
//! use sheetpane::ui::render_to_string;
//! use sheetpane::{Config, Theme};
//!
//! let state = AppState::new(Config::default(), Theme::default());
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("[ Show Bottom Sheet ]"));
//! ```

use crate::app::layout::{TITLE_BORDER_ROW, TITLE_ROW};
use crate::app::AppState;
use crate::ui::components::{
    render_blank, render_border, render_button, render_footer, render_header, render_panel_row,
    HostPalette,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of ANSI escapes.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut out = String::new();
    render_viewmodel(&mut out, &viewmodel, &state.theme);
    out
}

/// Renders a view model row by row.
pub fn render_viewmodel(out: &mut String, vm: &UIViewModel, theme: &Theme) {
    let clear = HostPalette::new(theme, 0.0);
    let dimmed = vm.backdrop.map(|b| (b.rows, HostPalette::new(theme, b.dim)));

    for row in 0..vm.rows {
        let cursor_row = row + 1;

        if let Some(panel) = vm.panel.filter(|p| row >= p.top) {
            render_panel_row(out, cursor_row, row - panel.top, &panel, theme, vm.cols);
            continue;
        }

        let palette = match &dimmed {
            Some((covered, palette)) if row < *covered => palette,
            _ => &clear,
        };
        render_host_row(out, row, vm, palette);
    }
}

fn render_host_row(out: &mut String, row: usize, vm: &UIViewModel, palette: &HostPalette) {
    let cursor_row = row + 1;
    let footer_row = vm.rows.saturating_sub(1);
    let footer_border_row = vm.rows.saturating_sub(2);

    if row == footer_row {
        render_footer(out, cursor_row, &vm.footer, palette, vm.cols);
    } else if row == footer_border_row || row == TITLE_BORDER_ROW {
        render_border(out, cursor_row, palette, vm.cols);
    } else if row == TITLE_ROW {
        render_header(out, cursor_row, &vm.header, palette, vm.cols);
    } else if row == vm.button.row {
        render_button(out, cursor_row, &vm.button, palette, vm.cols);
    } else {
        render_blank(out, cursor_row, palette, vm.cols);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SheetHandle;
    use crate::Config;

    fn mounted() -> AppState {
        let mut state = AppState::new(Config::default(), Theme::default());
        state.set_viewport(20, 60).expect("mount");
        state
    }

    #[test]
    fn every_row_is_drawn_once() {
        let frame = render_to_string(&mounted(), 20, 60);
        for row in 1..=20 {
            assert_eq!(frame.matches(&format!("\u{1b}[{row};1H")).count(), 1);
        }
        assert!(!frame.contains("\u{1b}[21;1H"));
    }

    #[test]
    fn closed_sheet_shows_host_screen() {
        let state = mounted();
        let frame = render_to_string(&state, 20, 60);
        assert!(frame.contains("[ Show Bottom Sheet ]"));
        assert!(frame.contains("Bottom Sheet (closed)"));
        assert!(!frame.contains(&Theme::bg(&state.theme.colors.sheet_bg)));
    }

    #[test]
    fn open_sheet_draws_panel_and_dims_host() {
        let mut state = mounted();
        state.open();
        while state.advance_frame(0.016) && state.sheet().is_some_and(|s| s.is_animating()) {}

        let frame = render_to_string(&state, 20, 60);
        let c = &state.theme.colors;
        assert!(frame.contains(&Theme::bg(&c.sheet_bg)));
        assert!(frame.contains(&Theme::bg(&c.chip_bg)));

        let dimmed = Theme::blend(&c.base_bg, &c.backdrop, 0.5);
        assert!(frame.contains(&Theme::bg(&dimmed)));
    }
}
