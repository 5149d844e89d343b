//! Sheet panel rows.
//!
//! Panel layout, by row index from the panel top:
//!
//! ```text
//! 0   blank
//! 1   ━━━━━━━━  drag handle
//! 2   blank
//! 3   ▆▆▆▆  ▆▆▆▆  ▆▆▆▆  chip row
//! 4+  blank
//! ```

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PanelInfo;

const HANDLE_ROW: usize = 1;
const CHIP_ROW: usize = 3;
const CHIP_WIDTH: usize = 10;
const CHIP_GAP: usize = 2;

/// Renders panel row `index` at pane row `row` (1-indexed).
pub fn render_panel_row(
    out: &mut String,
    row: usize,
    index: usize,
    panel: &PanelInfo,
    theme: &Theme,
    cols: usize,
) {
    let c = &theme.colors;
    position_cursor(out, row, 1);
    out.push_str(&Theme::bg(&c.sheet_bg));

    match index {
        HANDLE_ROW => {
            let width = panel.handle_width.min(cols);
            let left = (cols - width) / 2;
            let color = if panel.dragging { &c.sheet_fg } else { &c.handle };
            out.push_str(&" ".repeat(left));
            out.push_str(&Theme::fg(color));
            out.push_str(&"━".repeat(width));
            out.push_str(&" ".repeat(cols - left - width));
        }
        CHIP_ROW => render_chips(out, panel.chip_count, theme, cols),
        _ => out.push_str(&" ".repeat(cols)),
    }

    out.push_str(Theme::reset());
}

fn render_chips(out: &mut String, count: usize, theme: &Theme, cols: usize) {
    let c = &theme.colors;
    let mut used = 0;

    for i in 0..count {
        let gap = if i == 0 { CHIP_GAP } else { CHIP_GAP * 2 };
        if used + gap + CHIP_WIDTH > cols {
            break;
        }
        out.push_str(&" ".repeat(gap));
        out.push_str(&Theme::bg(&c.chip_bg));
        out.push_str(&" ".repeat(CHIP_WIDTH));
        out.push_str(&Theme::bg(&c.sheet_bg));
        used += gap + CHIP_WIDTH;
    }

    out.push_str(&" ".repeat(cols - used));
}
