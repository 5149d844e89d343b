//! Drag gesture tracking for the sheet.
//!
//! The tracker is a small reducer: it consumes [`GestureEvent`] samples that
//! carry the cumulative vertical delta since the press, and answers with a
//! [`GestureOutcome`] telling the sheet what to do with its offset. It never
//! touches the offset itself.
//!
//! # Phases
//!
//! ```text
//! Idle ──Start──▶ Pending ──Move(|dy| > threshold)──▶ Captured
//!  ▲                 │                                   │
//!  └──── End (tap) ──┘◀──────────── End (release) ───────┘
//! ```

/// One pointer sample. `dy` is the cumulative delta since [`GestureEvent::Start`],
/// positive when the pointer moved down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed on the sheet.
    Start,
    /// Pointer moved while held.
    Move {
        /// Cumulative vertical delta.
        dy: f64,
    },
    /// Pointer released.
    End {
        /// Cumulative vertical delta at release.
        dy: f64,
    },
}

/// Where the tracker is within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down on the sheet.
    #[default]
    Idle,
    /// Pointer is down but has not left the dead zone.
    Pending,
    /// Pointer owns the offset.
    Captured,
}

/// Which rest state a release resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// Snap back to fully open.
    Open,
    /// Dismiss: animate closed and unmount.
    Close,
}

/// What the sheet should do in response to a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Sample had no effect.
    Ignored,
    /// Gesture started, or moved inside the dead zone.
    Pending,
    /// Dead zone crossed on this sample: stop animations and jump the offset.
    Captured {
        /// Clamped offset to write.
        offset: f64,
    },
    /// Captured pointer moved.
    Moved {
        /// Clamped offset to write.
        offset: f64,
    },
    /// Captured pointer released.
    Released(ReleaseDecision),
    /// Pointer released without ever being captured.
    Tap,
}

/// Dead-zone, mapping and release rules for a vertical sheet drag.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
    drag_threshold: f64,
    release_threshold: f64,
    open_value: f64,
    closed_value: f64,
}

impl GestureTracker {
    /// Creates a tracker for a sheet whose offset runs from `open_value` to
    /// `closed_value`.
    ///
    /// The release threshold is half the distance between the two.
    #[must_use]
    pub fn new(drag_threshold: f64, open_value: f64, closed_value: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            drag_threshold: drag_threshold.max(0.0),
            release_threshold: (closed_value - open_value).abs() / 2.0,
            open_value,
            closed_value,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Drops any gesture in progress; later samples are ignored until the
    /// next [`GestureEvent::Start`].
    pub fn reset(&mut self) {
        if self.phase != GesturePhase::Idle {
            tracing::debug!(phase = ?self.phase, "gesture cancelled");
        }
        self.phase = GesturePhase::Idle;
    }

    /// Drops the gesture in progress, reporting whether it had captured the
    /// offset.
    ///
    /// A captured drag that loses its pointer without a release must still be
    /// resolved by the caller; `true` means the offset was left mid-drag.
    pub fn abandon(&mut self) -> bool {
        let captured = self.phase == GesturePhase::Captured;
        if captured {
            tracing::debug!("captured gesture abandoned");
        }
        self.phase = GesturePhase::Idle;
        captured
    }

    /// Clamps a candidate offset to the valid interval, whichever end is
    /// numerically smaller.
    #[must_use]
    pub fn clamp(&self, candidate: f64) -> f64 {
        let lower = self.open_value.min(self.closed_value);
        let upper = self.open_value.max(self.closed_value);
        candidate.clamp(lower, upper)
    }

    /// Maps a cumulative delta to a clamped offset, measured from fully open.
    #[must_use]
    pub fn offset_for(&self, dy: f64) -> f64 {
        self.clamp(self.open_value + dy)
    }

    /// Decides the rest state for a release at `dy`.
    ///
    /// Only a downward delta strictly beyond the threshold dismisses.
    #[must_use]
    pub fn release_decision(&self, dy: f64) -> ReleaseDecision {
        if dy > self.release_threshold {
            ReleaseDecision::Close
        } else {
            ReleaseDecision::Open
        }
    }

    /// Feeds one sample through the reducer.
    pub fn handle(&mut self, event: GestureEvent) -> GestureOutcome {
        match (self.phase, event) {
            (_, GestureEvent::Start) => {
                self.phase = GesturePhase::Pending;
                GestureOutcome::Pending
            }
            (GesturePhase::Idle, GestureEvent::Move { .. } | GestureEvent::End { .. }) => {
                GestureOutcome::Ignored
            }
            (GesturePhase::Pending, GestureEvent::Move { dy }) => {
                if dy.abs() > self.drag_threshold {
                    self.phase = GesturePhase::Captured;
                    tracing::debug!(dy, "gesture captured");
                    GestureOutcome::Captured {
                        offset: self.offset_for(dy),
                    }
                } else {
                    GestureOutcome::Pending
                }
            }
            (GesturePhase::Pending, GestureEvent::End { .. }) => {
                self.phase = GesturePhase::Idle;
                GestureOutcome::Tap
            }
            (GesturePhase::Captured, GestureEvent::Move { dy }) => {
                let offset = self.offset_for(dy);
                tracing::trace!(dy, offset, "gesture moved");
                GestureOutcome::Moved { offset }
            }
            (GesturePhase::Captured, GestureEvent::End { dy }) => {
                self.phase = GesturePhase::Idle;
                let decision = self.release_decision(dy);
                tracing::debug!(dy, decision = ?decision, "gesture released");
                GestureOutcome::Released(decision)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> GestureTracker {
        GestureTracker::new(5.0, 0.0, 100.0)
    }

    #[test]
    fn small_moves_stay_in_dead_zone() {
        let mut t = tracker();
        assert_eq!(t.handle(GestureEvent::Start), GestureOutcome::Pending);
        assert_eq!(t.handle(GestureEvent::Move { dy: 3.0 }), GestureOutcome::Pending);
        assert_eq!(t.handle(GestureEvent::Move { dy: 5.0 }), GestureOutcome::Pending);
        assert_eq!(t.phase(), GesturePhase::Pending);
    }

    #[test]
    fn crossing_dead_zone_captures() {
        let mut t = tracker();
        t.handle(GestureEvent::Start);
        assert_eq!(
            t.handle(GestureEvent::Move { dy: 6.0 }),
            GestureOutcome::Captured { offset: 6.0 }
        );
        assert_eq!(t.phase(), GesturePhase::Captured);
    }

    #[test]
    fn upward_movement_also_captures_but_clamps_to_open() {
        let mut t = tracker();
        t.handle(GestureEvent::Start);
        assert_eq!(
            t.handle(GestureEvent::Move { dy: -20.0 }),
            GestureOutcome::Captured { offset: 0.0 }
        );
    }

    #[test]
    fn moves_are_clamped_to_bounds() {
        let mut t = tracker();
        t.handle(GestureEvent::Start);
        t.handle(GestureEvent::Move { dy: 10.0 });
        for dy in [-1_000.0, -1.0, 0.0, 42.0, 99.9, 100.0, 250.0, f64::MAX] {
            match t.handle(GestureEvent::Move { dy }) {
                GestureOutcome::Moved { offset } => {
                    assert!((0.0..=100.0).contains(&offset), "dy {dy} gave {offset}");
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn clamp_is_order_independent() {
        let inverted = GestureTracker::new(5.0, 100.0, 0.0);
        assert!((inverted.clamp(150.0) - 100.0).abs() < f64::EPSILON);
        assert!((inverted.clamp(-3.0) - 0.0).abs() < f64::EPSILON);
        assert!((inverted.clamp(40.0) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn release_threshold_is_strict() {
        let t = tracker();
        assert_eq!(t.release_decision(51.0), ReleaseDecision::Close);
        assert_eq!(t.release_decision(50.0), ReleaseDecision::Open);
        assert_eq!(t.release_decision(49.0), ReleaseDecision::Open);
        assert_eq!(t.release_decision(0.0), ReleaseDecision::Open);
        assert_eq!(t.release_decision(-30.0), ReleaseDecision::Open);
    }

    #[test]
    fn release_after_capture_resolves_and_returns_to_idle() {
        let mut t = tracker();
        t.handle(GestureEvent::Start);
        t.handle(GestureEvent::Move { dy: 60.0 });
        assert_eq!(
            t.handle(GestureEvent::End { dy: 60.0 }),
            GestureOutcome::Released(ReleaseDecision::Close)
        );
        assert_eq!(t.phase(), GesturePhase::Idle);
    }

    #[test]
    fn captured_release_with_no_net_movement_reopens() {
        let mut t = tracker();
        t.handle(GestureEvent::Start);
        t.handle(GestureEvent::Move { dy: 8.0 });
        assert_eq!(
            t.handle(GestureEvent::End { dy: 0.0 }),
            GestureOutcome::Released(ReleaseDecision::Open)
        );
    }

    #[test]
    fn release_without_capture_is_a_tap() {
        let mut t = tracker();
        t.handle(GestureEvent::Start);
        t.handle(GestureEvent::Move { dy: 2.0 });
        assert_eq!(t.handle(GestureEvent::End { dy: 2.0 }), GestureOutcome::Tap);
    }

    #[test]
    fn abandon_reports_only_captured_gestures() {
        let mut t = tracker();
        assert!(!t.abandon());

        t.handle(GestureEvent::Start);
        t.handle(GestureEvent::Move { dy: 2.0 });
        assert!(!t.abandon());
        assert_eq!(t.phase(), GesturePhase::Idle);

        t.handle(GestureEvent::Start);
        t.handle(GestureEvent::Move { dy: 30.0 });
        assert!(t.abandon());
        assert_eq!(t.phase(), GesturePhase::Idle);
        assert_eq!(t.handle(GestureEvent::End { dy: 0.0 }), GestureOutcome::Ignored);
    }

    #[test]
    fn samples_after_reset_are_ignored() {
        let mut t = tracker();
        t.handle(GestureEvent::Start);
        t.handle(GestureEvent::Move { dy: 30.0 });
        t.reset();
        assert_eq!(t.handle(GestureEvent::Move { dy: 40.0 }), GestureOutcome::Ignored);
        assert_eq!(t.handle(GestureEvent::End { dy: 90.0 }), GestureOutcome::Ignored);
    }
}
