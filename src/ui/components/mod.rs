//! Composable UI component renderers.
//!
//! Each component renders one pane row into the frame buffer. The renderer
//! decides per row whether it belongs to the sheet panel or to the host
//! screen; host rows are drawn with a [`HostPalette`] already blended toward
//! the backdrop colour, so the backdrop is not a separate layer.
//!
//! # Components
//!
//! - [`header`]: Title bar with the sheet state
//! - [`footer`]: Help text and keybinding hints
//! - [`host`]: Blank rows, borders and the open button
//! - [`panel`]: Sheet rows (handle bar, chip row, fill)

mod footer;
mod header;
mod host;
mod panel;

pub use footer::render_footer;
pub use header::render_header;
pub use host::{render_blank, render_border, render_button};
pub use panel::render_panel_row;

use crate::ui::theme::Theme;

/// Host screen colours after applying the backdrop dim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPalette {
    /// Background of every host row.
    pub base_bg: String,
    /// Title text.
    pub header_fg: String,
    /// Footer text and disabled button label.
    pub text_dim: String,
    /// Separator lines.
    pub border: String,
    /// Button label.
    pub button_fg: String,
    /// Button fill.
    pub button_bg: String,
}

impl HostPalette {
    /// Theme colours blended toward `theme.colors.backdrop` by `dim`.
    #[must_use]
    pub fn new(theme: &Theme, dim: f64) -> Self {
        let c = &theme.colors;
        let mix = |hex: &str| Theme::blend(hex, &c.backdrop, dim);
        Self {
            base_bg: mix(&c.base_bg),
            header_fg: mix(&c.header_fg),
            text_dim: mix(&c.text_dim),
            border: mix(&c.border),
            button_fg: mix(&c.button_fg),
            button_bg: mix(&c.button_bg),
        }
    }
}
