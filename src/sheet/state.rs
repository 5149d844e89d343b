//! Position state machine types for the bottom sheet.
//!
//! ```text
//!            open()                 settle
//!  Closed ───────────▶ Opening ───────────────▶ Open
//!    ▲                  ▲   │                    │
//!    │ settle(finished) │   │ capture            │ capture
//!    │                  │   ▼                    ▼
//!  Closing ◀────────────┴─ Dragging ◀────────────┘
//!            close() / release past threshold
//! ```
//!
//! `Closed` and `Open` are the only rest states. Any state may be superseded
//! by a newer intent (`open()`, `close()`, or a captured drag).

/// Current phase of the sheet's position lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetState {
    /// Fully closed and unmounted.
    #[default]
    Closed,

    /// Spring animation toward the open offset is running.
    Opening,

    /// Fully open and at rest.
    Open,

    /// A pointer is captured and writes the offset directly.
    Dragging,

    /// Spring animation toward the closed offset is running.
    ///
    /// The sheet stays mounted until the animation reports that it finished.
    Closing,
}

impl SheetState {
    /// Whether the overlay subtree (sheet and backdrop) should be mounted.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

impl std::fmt::Display for SheetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Dragging => "dragging",
            Self::Closing => "closing",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_closed_is_hidden() {
        assert!(!SheetState::Closed.is_visible());
        for state in [
            SheetState::Opening,
            SheetState::Open,
            SheetState::Dragging,
            SheetState::Closing,
        ] {
            assert!(state.is_visible(), "{state} should be visible");
        }
    }

    #[test]
    fn display_names_are_lowercase() {
        assert_eq!(SheetState::Dragging.to_string(), "dragging");
        assert_eq!(SheetState::Closed.to_string(), "closed");
    }
}
