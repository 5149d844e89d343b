//! Pointer hit targets and press tracking.
//!
//! Zellij reports mouse positions as pane lines and columns. The application
//! layer remembers where a press landed so that later `Hold` and `Release`
//! samples can be turned into a cumulative vertical delta, and so that a tap
//! only fires when press and release hit the same target.

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The sheet panel (drag source).
    Sheet,
    /// The backdrop above the panel (tap-to-close).
    Backdrop,
    /// The host screen's open button.
    Button,
    /// Anything else on the host screen.
    Host,
}

/// A pointer press that has not been released yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    /// Target under the pointer when it went down.
    pub target: HitTarget,
    /// Pane line of the press.
    pub line: isize,
}

impl Press {
    /// Cumulative vertical delta from the press to `line`; positive is down.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dy(&self, line: isize) -> f64 {
        line.saturating_sub(self.line) as f64
    }
}
