//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij directly. It returns a `Vec<Action>`
//! and the plugin shim turns each one into a host API call, which keeps the
//! whole application layer testable off-host.
//!
//! # Example
//!
//! ```rust
//! use sheetpane::app::Action;
//!
//! let actions = vec![Action::ScheduleFrame { after_secs: 0.016 }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (e.g., pressing 'q').
    CloseFocus,

    /// Requests one animation frame.
    ///
    /// Executed as a Zellij `set_timeout`; the resulting `Timer` event comes
    /// back as [`Event::Frame`](crate::app::Event::Frame). At most one frame
    /// is outstanding at a time.
    ScheduleFrame {
        /// Delay before the frame, in seconds.
        after_secs: f64,
    },
}
