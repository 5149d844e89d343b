//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: row positions are already
//! resolved and the backdrop dim is already scaled by `backdrop_alpha`.
//!
//! # Example
//!
//! ```rust
//! use sheetpane::ui::viewmodel::{ButtonInfo, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     rows: 24,
//!     cols: 80,
//!     header: HeaderInfo { title: " Bottom Sheet (closed) ".to_string() },
//!     button: ButtonInfo {
//!         label: "[ Show Bottom Sheet ]".to_string(),
//!         row: 12,
//!         col: 29,
//!         enabled: true,
//!     },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     backdrop: None,
//!     panel: None,
//! };
//! assert!(vm.panel.is_none());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Pane height.
    pub rows: usize,

    /// Pane width.
    pub cols: usize,

    /// Header information (title, sheet state).
    pub header: HeaderInfo,

    /// Host open button.
    pub button: ButtonInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Backdrop over the host screen, present while the sheet is mounted.
    pub backdrop: Option<BackdropInfo>,

    /// Sheet panel, present while the sheet is mounted.
    pub panel: Option<PanelInfo>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Host button display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonInfo {
    /// Button label including brackets.
    pub label: String,
    /// Row of the button (0-based).
    pub row: usize,
    /// First column of the label (0-based).
    pub col: usize,
    /// Whether clicking would do anything (sheet hidden).
    pub enabled: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Backdrop display information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropInfo {
    /// Host rows covered by the backdrop, counted from the top.
    pub rows: usize,
    /// Blend factor toward the backdrop colour, in `[0, 1]`.
    pub dim: f64,
}

/// Sheet panel display information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelInfo {
    /// First pane row occupied by the panel (0-based).
    ///
    /// Panel row `n` is drawn at pane row `top + n`; rows pushed past the
    /// pane bottom are clipped.
    pub top: usize,
    /// Width of the drag handle bar.
    pub handle_width: usize,
    /// Number of chips in the content row.
    pub chip_count: usize,
    /// Whether the panel is held by the pointer.
    pub dragging: bool,
}
