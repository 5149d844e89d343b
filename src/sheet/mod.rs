//! Draggable bottom sheet core.
//!
//! This module is independent of Zellij: it is a state machine over an
//! offset scalar, driven by three kinds of input:
//!
//! - imperative calls through [`SheetHandle`] (`open`, `close`)
//! - pointer samples (`pointer_down`, `pointer_move`, `pointer_up`)
//! - animation frames (`tick`)
//!
//! and read back through [`Sheet::snapshot`] at render time.
//!
//! # Modules
//!
//! - [`state`]: the `Closed | Opening | Open | Dragging | Closing` machine
//! - [`spring`]: spring animation primitive with superseding semantics
//! - [`controller`]: owner of the offset, open/close transitions
//! - [`gesture`]: dead zone, drag mapping and release decision
//! - [`backdrop`]: offset → backdrop opacity
//!
//! # Example
//!
//! ```rust
//! use sheetpane::sheet::{Sheet, SheetConfig, SheetHandle, SheetState};
//!
//! let mut sheet = Sheet::new(SheetConfig::new(10.0));
//! sheet.open();
//! assert!(sheet.snapshot().visible);
//!
//! while sheet.tick(1.0 / 60.0) {}
//! assert_eq!(sheet.snapshot().state, SheetState::Open);
//! assert!((sheet.snapshot().backdrop_opacity - 1.0).abs() < f64::EPSILON);
//! ```

pub mod backdrop;
pub mod controller;
pub mod gesture;
pub mod spring;
pub mod state;

pub use backdrop::backdrop_opacity;
pub use controller::PositionController;
pub use gesture::{GestureEvent, GestureOutcome, GesturePhase, GestureTracker, ReleaseDecision};
pub use spring::{AnimationEnd, AnimationId, SpringConfig};
pub use state::SheetState;

/// Dead zone (in rows) used when a config does not set one.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 0.5;

/// Caller-facing control surface of a sheet.
///
/// Hosts bind their buttons, keys and dismiss gestures to these two calls
/// and never touch the offset or state directly.
pub trait SheetHandle {
    /// Begins opening. Idempotent while open or opening.
    fn open(&mut self);

    /// Begins closing. Idempotent while closed or closing.
    fn close(&mut self);
}

/// Construction-time constants of a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Sheet height `H`; the offset lives in `[0, H]`.
    pub height: f64,
    /// Movement that must be exceeded before a press becomes a drag.
    pub drag_threshold: f64,
    /// Spring used for open, close and snap-back.
    pub spring: SpringConfig,
}

impl SheetConfig {
    /// Config with the given height and default threshold and spring.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            spring: SpringConfig::default(),
        }
    }

    /// Overrides the drag dead zone.
    #[must_use]
    pub const fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    /// Overrides the spring.
    #[must_use]
    pub const fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Downward release distance beyond which a drag dismisses: `H / 2`.
    #[must_use]
    pub fn release_threshold(&self) -> f64 {
        self.height / 2.0
    }
}

/// Read-only view of a sheet for rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSnapshot {
    /// Live offset, `0` = open, `height` = closed.
    pub offset: f64,
    /// Sheet height.
    pub height: f64,
    /// Current state.
    pub state: SheetState,
    /// Whether sheet and backdrop are mounted.
    pub visible: bool,
    /// Backdrop opacity derived from `offset`.
    pub backdrop_opacity: f64,
}

/// A bottom sheet: position controller plus gesture tracker.
#[derive(Debug, Clone)]
pub struct Sheet {
    controller: PositionController,
    tracker: GestureTracker,
}

impl Sheet {
    /// Creates a closed, unmounted sheet.
    #[must_use]
    pub fn new(config: SheetConfig) -> Self {
        let controller = PositionController::new(config.height, config.spring);
        let tracker = GestureTracker::new(
            config.drag_threshold,
            controller.open_value(),
            controller.closed_value(),
        );
        tracing::debug!(
            height = controller.height(),
            drag_threshold = config.drag_threshold,
            "sheet created"
        );
        Self {
            controller,
            tracker,
        }
    }

    /// Current render values.
    #[must_use]
    pub fn snapshot(&self) -> SheetSnapshot {
        let c = &self.controller;
        SheetSnapshot {
            offset: c.offset(),
            height: c.height(),
            state: c.state(),
            visible: c.visible(),
            backdrop_opacity: backdrop_opacity(c.offset(), c.open_value(), c.closed_value()),
        }
    }

    /// Whether frames are needed to make progress.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn gesture_phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    /// Ends the gesture in progress without a release sample.
    ///
    /// A drag that had captured the offset snaps back open, so the sheet
    /// never stays in `Dragging` without a pointer. Returns `true` if that
    /// started a transition.
    pub fn abandon_gesture(&mut self) -> bool {
        if !self.tracker.abandon() {
            return false;
        }
        self.controller.open();
        true
    }

    /// Pointer pressed on the sheet body.
    ///
    /// A gesture still in progress (its release was lost) is abandoned
    /// first. Returns `false` when the sheet is not mounted.
    pub fn pointer_down(&mut self) -> bool {
        self.abandon_gesture();
        if !self.controller.visible() {
            return false;
        }
        self.tracker.handle(GestureEvent::Start);
        true
    }

    /// Pointer moved; `dy` is cumulative since the press.
    ///
    /// Returns `true` if the offset changed.
    pub fn pointer_move(&mut self, dy: f64) -> bool {
        match self.tracker.handle(GestureEvent::Move { dy }) {
            GestureOutcome::Captured { offset } => {
                if !self.controller.begin_drag(offset) {
                    self.tracker.reset();
                    return false;
                }
                true
            }
            GestureOutcome::Moved { offset } => {
                let before = self.controller.offset();
                self.controller.drag_to(offset);
                (self.controller.offset() - before).abs() > f64::EPSILON
            }
            _ => false,
        }
    }

    /// Pointer released; `dy` is cumulative since the press.
    ///
    /// Returns `true` if the release started a transition.
    pub fn pointer_up(&mut self, dy: f64) -> bool {
        match self.tracker.handle(GestureEvent::End { dy }) {
            GestureOutcome::Released(ReleaseDecision::Close) => {
                self.controller.close();
                true
            }
            GestureOutcome::Released(ReleaseDecision::Open) => {
                self.controller.open();
                true
            }
            _ => false,
        }
    }

    /// Backdrop tapped: dismiss exactly like [`SheetHandle::close`].
    pub fn tap_backdrop(&mut self) {
        if !self.controller.visible() {
            return;
        }
        tracing::debug!("backdrop tapped");
        self.close();
    }

    /// Advances animations by `dt` seconds. Returns `true` while more frames
    /// are needed.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.controller.tick(dt)
    }
}

impl SheetHandle for Sheet {
    fn open(&mut self) {
        self.tracker.reset();
        self.controller.open();
    }

    fn close(&mut self) {
        self.tracker.reset();
        self.controller.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn sheet() -> Sheet {
        Sheet::new(SheetConfig::new(100.0).with_drag_threshold(5.0))
    }

    fn settle(sheet: &mut Sheet) {
        for _ in 0..1_000 {
            if !sheet.tick(FRAME) {
                return;
            }
        }
        panic!("sheet never settled");
    }

    fn open_sheet() -> Sheet {
        let mut s = sheet();
        s.open();
        settle(&mut s);
        s
    }

    fn drag(sheet: &mut Sheet, samples: &[f64]) -> Vec<f64> {
        assert!(sheet.pointer_down());
        samples
            .iter()
            .map(|&dy| {
                sheet.pointer_move(dy);
                sheet.snapshot().offset
            })
            .collect()
    }

    #[test]
    fn release_threshold_is_half_height() {
        assert!((SheetConfig::new(100.0).release_threshold() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_stays_in_bounds_for_wild_drags() {
        let mut s = open_sheet();
        let samples = [6.0, 3_000.0, -3_000.0, 55.5, 101.0, -0.1, 1e12];
        for offset in drag(&mut s, &samples) {
            assert!((0.0..=100.0).contains(&offset), "offset {offset} out of bounds");
        }
    }

    #[test]
    fn drag_sample_tracks_without_animation() {
        let mut s = open_sheet();
        assert_eq!(drag(&mut s, &[10.0, 40.0]), vec![10.0, 40.0]);
        assert_eq!(s.snapshot().state, SheetState::Dragging);
        assert!(!s.is_animating());
    }

    #[test]
    fn release_just_over_half_closes() {
        let mut s = open_sheet();
        drag(&mut s, &[51.0]);
        assert!(s.pointer_up(51.0));
        assert_eq!(s.snapshot().state, SheetState::Closing);
        settle(&mut s);
        assert_eq!(s.snapshot().state, SheetState::Closed);
        assert!(!s.snapshot().visible);
    }

    #[test]
    fn release_just_under_half_reopens() {
        let mut s = open_sheet();
        drag(&mut s, &[49.0]);
        s.pointer_up(49.0);
        assert_eq!(s.snapshot().state, SheetState::Opening);
        settle(&mut s);
        assert_eq!(s.snapshot().state, SheetState::Open);
        assert!(s.snapshot().offset.abs() < f64::EPSILON);
    }

    #[test]
    fn captured_release_at_zero_reopens() {
        let mut s = open_sheet();
        drag(&mut s, &[20.0]);
        s.pointer_up(0.0);
        settle(&mut s);
        assert_eq!(s.snapshot().state, SheetState::Open);
        assert!(s.snapshot().visible);
    }

    #[test]
    fn tap_on_sheet_changes_nothing() {
        let mut s = open_sheet();
        let before = s.snapshot();
        s.pointer_down();
        s.pointer_move(1.0);
        assert!(!s.pointer_up(1.0));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn backdrop_follows_live_drag_offset() {
        let mut s = open_sheet();
        drag(&mut s, &[50.0]);
        assert!((s.snapshot().backdrop_opacity - 0.5).abs() < f64::EPSILON);
        s.pointer_move(100.0);
        assert!(s.snapshot().backdrop_opacity.abs() < f64::EPSILON);
    }

    #[test]
    fn backdrop_tap_closes_like_close() {
        let mut s = open_sheet();
        s.tap_backdrop();
        assert_eq!(s.snapshot().state, SheetState::Closing);
        settle(&mut s);
        assert!(!s.snapshot().visible);
    }

    #[test]
    fn pointer_on_hidden_sheet_is_refused() {
        let mut s = sheet();
        assert!(!s.pointer_down());
        assert!(!s.pointer_move(30.0));
        assert_eq!(s.snapshot().state, SheetState::Closed);
    }

    #[test]
    fn close_during_drag_cancels_gesture() {
        let mut s = open_sheet();
        drag(&mut s, &[30.0]);
        s.close();
        assert_eq!(s.gesture_phase(), GesturePhase::Idle);
        assert!(!s.pointer_move(10.0));
        assert!(!s.pointer_up(10.0));
        settle(&mut s);
        assert_eq!(s.snapshot().state, SheetState::Closed);
    }

    #[test]
    fn second_press_resolves_a_captured_drag() {
        let mut s = open_sheet();
        drag(&mut s, &[30.0]);
        assert!(s.pointer_down());
        assert_eq!(s.snapshot().state, SheetState::Opening);
        assert_eq!(s.gesture_phase(), GesturePhase::Pending);

        assert!(!s.pointer_up(0.0));
        settle(&mut s);
        let snap = s.snapshot();
        assert_eq!(snap.state, SheetState::Open);
        assert!(snap.offset.abs() < f64::EPSILON);
    }

    #[test]
    fn abandoning_an_uncaptured_press_changes_nothing() {
        let mut s = open_sheet();
        let before = s.snapshot();
        s.pointer_down();
        s.pointer_move(2.0);
        assert!(!s.abandon_gesture());
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.gesture_phase(), GesturePhase::Idle);
    }

    #[test]
    fn drag_can_catch_a_closing_sheet() {
        let mut s = open_sheet();
        s.close();
        s.tick(FRAME);
        drag(&mut s, &[10.0]);
        assert_eq!(s.snapshot().state, SheetState::Dragging);
        assert!(s.snapshot().visible);
        s.pointer_up(10.0);
        settle(&mut s);
        assert_eq!(s.snapshot().state, SheetState::Open);
    }

    #[test]
    fn end_to_end_drag_to_dismiss() {
        let mut s = sheet();
        s.open();
        settle(&mut s);
        let snap = s.snapshot();
        assert!(snap.visible);
        assert_eq!(snap.state, SheetState::Open);

        assert_eq!(drag(&mut s, &[10.0, 40.0, 90.0]), vec![10.0, 40.0, 90.0]);
        s.pointer_up(90.0);
        assert_eq!(s.snapshot().state, SheetState::Closing);
        assert!(s.snapshot().visible);

        settle(&mut s);
        assert_eq!(s.snapshot().state, SheetState::Closed);
        assert!(!s.snapshot().visible);
    }
}
