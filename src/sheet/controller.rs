//! Position controller: the single owner of the sheet offset.
//!
//! The offset convention is `0 = open`, `height = closed`. Every write,
//! whether from the spring or from a drag, is clamped to `[0, height]`.
//!
//! Only one intent drives the offset at a time. Starting an animation or a
//! drag supersedes whatever was running; the superseded animation's
//! completion is recognised as stale by its id and dropped, so an
//! interrupted close can never unmount a sheet that was reopened.

use super::spring::{AnimationEnd, AnimationId, Animator, SpringConfig};
use super::state::SheetState;

/// Owns the offset, the state machine, and the spring that animates them.
#[derive(Debug, Clone)]
pub struct PositionController {
    height: f64,
    offset: f64,
    state: SheetState,
    animator: Animator,
    /// Animation whose completion may still change `state`.
    intent: Option<AnimationId>,
}

impl PositionController {
    /// Creates a closed, unmounted controller for a sheet of `height` rows.
    #[must_use]
    pub fn new(height: f64, spring: SpringConfig) -> Self {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        Self {
            height,
            offset: height,
            state: SheetState::Closed,
            animator: Animator::new(spring, 0.0, height),
            intent: None,
        }
    }

    /// Offset of the fully open sheet.
    #[must_use]
    pub const fn open_value(&self) -> f64 {
        0.0
    }

    /// Offset of the fully closed sheet.
    #[must_use]
    pub const fn closed_value(&self) -> f64 {
        self.height
    }

    /// Sheet height in rows.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Live offset.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SheetState {
        self.state
    }

    /// Whether the overlay should be mounted.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Whether a spring animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Begins the opening transition. No-op while `Open` or `Opening`.
    ///
    /// The sheet is mounted immediately; the spring starts from the current
    /// offset.
    pub fn open(&mut self) {
        if matches!(self.state, SheetState::Open | SheetState::Opening) {
            tracing::trace!(state = %self.state, "open ignored, already open");
            return;
        }
        tracing::debug!(from = %self.state, offset = self.offset, "sheet opening");
        self.state = SheetState::Opening;
        self.animate_to(self.open_value());
    }

    /// Begins the closing transition. No-op while `Closed` or `Closing`.
    ///
    /// The sheet stays mounted until the close animation finishes.
    pub fn close(&mut self) {
        if matches!(self.state, SheetState::Closed | SheetState::Closing) {
            tracing::trace!(state = %self.state, "close ignored, already closed");
            return;
        }
        tracing::debug!(from = %self.state, offset = self.offset, "sheet closing");
        self.state = SheetState::Closing;
        self.animate_to(self.closed_value());
    }

    /// Hands the offset to a captured pointer.
    ///
    /// Cancels any running animation. Returns `false` (and does nothing) if
    /// the sheet is not mounted.
    pub fn begin_drag(&mut self, offset: f64) -> bool {
        if !self.visible() {
            tracing::debug!("drag ignored, sheet not mounted");
            return false;
        }
        self.intent = None;
        if let Some(end) = self.animator.cancel() {
            tracing::trace!(id = ?end.id, "animation superseded by drag");
        }
        tracing::debug!(from = %self.state, "sheet dragging");
        self.state = SheetState::Dragging;
        self.set_offset(offset);
        true
    }

    /// Writes a dragged offset directly, without animation.
    pub fn drag_to(&mut self, offset: f64) {
        if self.state != SheetState::Dragging {
            return;
        }
        self.set_offset(offset);
    }

    /// Advances the running animation by `dt` seconds.
    ///
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self, dt: f64) -> bool {
        if let Some(end) = self.animator.advance(&mut self.offset, dt) {
            self.on_animation_end(end);
        }
        self.set_offset(self.offset);
        self.animator.is_running()
    }

    /// Reacts to an animation completion.
    ///
    /// Completions of superseded animations and unfinished completions are
    /// ignored. A finished open settles to `Open`; a finished close settles
    /// to `Closed` and unmounts.
    pub fn on_animation_end(&mut self, end: AnimationEnd) {
        if self.intent != Some(end.id) {
            tracing::trace!(id = ?end.id, finished = end.finished, "stale animation end ignored");
            return;
        }
        if !end.finished {
            return;
        }
        self.intent = None;

        match self.state {
            SheetState::Opening => {
                self.state = SheetState::Open;
                tracing::debug!("sheet open");
            }
            SheetState::Closing => {
                self.state = SheetState::Closed;
                tracing::debug!("sheet closed and unmounted");
            }
            other => {
                tracing::debug!(state = %other, "animation finished outside a transition");
            }
        }
    }

    fn animate_to(&mut self, target: f64) {
        let (id, interrupted) = self.animator.start(target);
        self.intent = Some(id);
        if let Some(end) = interrupted {
            self.on_animation_end(end);
        }
    }

    fn set_offset(&mut self, value: f64) {
        self.offset = if value.is_finite() {
            value.clamp(0.0, self.height)
        } else {
            self.height
        };
    }

    #[cfg(test)]
    pub(crate) const fn current_intent(&self) -> Option<AnimationId> {
        self.intent
    }
}
