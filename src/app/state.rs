//! Application state management and view model computation.
//!
//! [`AppState`] hosts one bottom sheet on one host screen. It owns:
//!
//! - the [`Sheet`], mounted lazily once the pane size is first known
//! - the pending pointer press, for hit-testing drags and taps
//! - the frame scheduling flag, so at most one timer is outstanding
//!
//! # Example
//!
//! ```rust
//! use sheetpane::app::AppState;
//! use sheetpane::sheet::SheetHandle;
//! use sheetpane::{Config, Theme};
//!
//! let mut state = AppState::new(Config::default(), Theme::default());
//! state.set_viewport(24, 80)?;
//! state.open();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.panel.is_some());
//! # Ok::<(), sheetpane::SheetpaneError>(())
//! ```

use super::actions::Action;
use super::layout::{Layout, BUTTON_LABEL};
use super::pointer::{HitTarget, Press};
use crate::domain::{Result, SheetpaneError};
use crate::sheet::{Sheet, SheetHandle, SheetSnapshot, SheetState};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BackdropInfo, ButtonInfo, FooterInfo, HeaderInfo, PanelInfo, UIViewModel,
};
use crate::Config;

/// Number of chips shown in the sheet's top row.
const CHIP_COUNT: usize = 3;
/// Width of the drag handle bar, in columns.
const HANDLE_WIDTH: usize = 8;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Plugin configuration (sheet constants, frame rate, backdrop dim).
    pub config: Config,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Pane size last reported by the host, as `(rows, cols)`.
    pub viewport: Option<(usize, usize)>,

    sheet: Option<Sheet>,
    press: Option<Press>,
    frame_pending: bool,
}

impl AppState {
    /// Creates state with no sheet mounted yet.
    #[must_use]
    pub const fn new(config: Config, theme: Theme) -> Self {
        Self {
            config,
            theme,
            viewport: None,
            sheet: None,
            press: None,
            frame_pending: false,
        }
    }

    /// The mounted sheet, if the viewport is known.
    #[must_use]
    pub const fn sheet(&self) -> Option<&Sheet> {
        self.sheet.as_ref()
    }

    /// Render values of the mounted sheet.
    #[must_use]
    pub fn snapshot(&self) -> Option<SheetSnapshot> {
        self.sheet.as_ref().map(Sheet::snapshot)
    }

    /// Whether an animation frame has been requested and not yet delivered.
    #[must_use]
    pub const fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Layout for the last known viewport.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        let (rows, cols) = self.viewport?;
        Some(Layout::compute(rows, cols, self.snapshot().as_ref()))
    }

    /// Records the pane size and mounts the sheet on first call.
    ///
    /// The sheet height is read once, from the first viewport; later calls
    /// only update the size used for layout.
    ///
    /// # Errors
    ///
    /// Returns [`SheetpaneError::Config`] if the sheet must be mounted and
    /// the viewport has no rows. The next call retries.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) -> Result<bool> {
        let changed = self.viewport != Some((rows, cols));
        self.viewport = Some((rows, cols));

        if self.sheet.is_some() {
            return Ok(changed);
        }
        if rows == 0 {
            return Err(SheetpaneError::Config(
                "cannot mount sheet in a pane with no rows".to_string(),
            ));
        }

        let sheet_config = self.config.sheet_config(rows);
        tracing::debug!(rows, cols, height = sheet_config.height, "mounting sheet");
        self.sheet = Some(Sheet::new(sheet_config));

        if self.config.open_on_load {
            self.open();
        }
        Ok(true)
    }

    /// Handles a pointer press at a pane position.
    ///
    /// Zellij sends no release when the button goes up outside the pane, so
    /// a drag still captured from an earlier press is resolved first.
    ///
    /// Returns `true` if a re-render is needed.
    pub fn pointer_down(&mut self, line: isize, col: usize) -> bool {
        let resolved = self.sheet.as_mut().is_some_and(Sheet::abandon_gesture);
        let Some(target) = self.layout().and_then(|l| l.hit_test(line, col)) else {
            self.press = None;
            return resolved;
        };
        tracing::debug!(line, col, target = ?target, "pointer down");

        if target == HitTarget::Sheet {
            if let Some(sheet) = self.sheet.as_mut() {
                sheet.pointer_down();
            }
        }
        self.press = Some(Press { target, line });
        resolved
    }

    /// Handles pointer movement while held.
    ///
    /// Returns `true` if the sheet moved.
    pub fn pointer_drag(&mut self, line: isize) -> bool {
        let Some(press) = self.press else {
            return false;
        };
        if press.target != HitTarget::Sheet {
            return false;
        }
        self.sheet
            .as_mut()
            .is_some_and(|sheet| sheet.pointer_move(press.dy(line)))
    }

    /// Handles a pointer release at a pane position.
    ///
    /// Returns `true` if a re-render is needed.
    pub fn pointer_up(&mut self, line: isize, col: usize) -> bool {
        let Some(press) = self.press.take() else {
            return false;
        };
        let released_on = self.layout().and_then(|l| l.hit_test(line, col));
        tracing::debug!(line, col, pressed = ?press.target, released = ?released_on, "pointer up");

        match press.target {
            HitTarget::Sheet => self
                .sheet
                .as_mut()
                .is_some_and(|sheet| sheet.pointer_up(press.dy(line))),
            HitTarget::Backdrop if released_on == Some(HitTarget::Backdrop) => {
                match self.sheet.as_mut() {
                    Some(sheet) => {
                        sheet.tap_backdrop();
                        true
                    }
                    None => false,
                }
            }
            HitTarget::Button if released_on == Some(HitTarget::Button) => {
                tracing::debug!("open button clicked");
                self.open();
                true
            }
            _ => false,
        }
    }

    /// Advances animations by one timer frame.
    ///
    /// Returns `true` if the offset or state changed.
    pub fn advance_frame(&mut self, elapsed: f64) -> bool {
        self.frame_pending = false;
        let Some(sheet) = self.sheet.as_mut() else {
            return false;
        };
        let before = sheet.snapshot();
        let still_animating = sheet.tick(elapsed);
        let after = sheet.snapshot();
        tracing::trace!(elapsed, offset = after.offset, still_animating, "frame advanced");
        before != after
    }

    /// Returns a frame request if the sheet is animating and none is pending.
    pub fn request_frame(&mut self) -> Option<Action> {
        let animating = self.sheet.as_ref().is_some_and(Sheet::is_animating);
        if !animating || self.frame_pending {
            return None;
        }
        self.frame_pending = true;
        Some(Action::ScheduleFrame {
            after_secs: self.config.frame_interval,
        })
    }

    /// Computes a renderable UI view model for a pane size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let snapshot = self.snapshot();
        let layout = Layout::compute(rows, cols, snapshot.as_ref());
        let state = snapshot.map_or(SheetState::Closed, |s| s.state);

        let backdrop = snapshot.filter(|s| s.visible).map(|snap| BackdropInfo {
            rows: layout.backdrop_rows(),
            dim: snap.backdrop_opacity * self.config.backdrop_alpha,
        });

        let panel = layout.sheet_top.map(|top| PanelInfo {
            top,
            handle_width: HANDLE_WIDTH.min(cols),
            chip_count: CHIP_COUNT,
            dragging: state == SheetState::Dragging,
        });

        UIViewModel {
            rows,
            cols,
            header: Self::compute_header(state),
            button: ButtonInfo {
                label: BUTTON_LABEL.to_string(),
                row: layout.button.row,
                col: layout.button.col_start,
                enabled: !state.is_visible(),
            },
            footer: Self::compute_footer(state),
            backdrop,
            panel,
        }
    }

    fn compute_header(state: SheetState) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Bottom Sheet ({state}) "),
        }
    }

    fn compute_footer(state: SheetState) -> FooterInfo {
        let keybindings = if state.is_visible() {
            "drag sheet: move  click backdrop / c / Esc: close  q: quit"
        } else {
            "click button / o / Enter: open sheet  q: quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

impl SheetHandle for AppState {
    fn open(&mut self) {
        match self.sheet.as_mut() {
            Some(sheet) => sheet.open(),
            None => tracing::warn!("open called before the sheet was mounted"),
        }
    }

    fn close(&mut self) {
        match self.sheet.as_mut() {
            Some(sheet) => sheet.close(),
            None => tracing::warn!("close called before the sheet was mounted"),
        }
    }
}
