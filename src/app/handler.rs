//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns host input (keys,
//! mouse samples, timer frames, pane resizes) into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! After every event the handler checks whether the sheet is animating and,
//! if no frame is outstanding, appends an [`Action::ScheduleFrame`]. Frames
//! therefore keep coming exactly as long as a spring is running.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Viewport`
//! - **Commands**: `OpenSheet`, `CloseSheet`, `CloseFocus`
//! - **Pointer**: `PointerDown`, `PointerDrag`, `PointerUp`
//! - **Animation**: `Frame`
//!
//! # Example
//!
//! ```rust
//! use sheetpane::app::{AppState, Action, Event, handle_event};
//! use sheetpane::{Config, Theme};
//!
//! let mut state = AppState::new(Config::default(), Theme::default());
//! handle_event(&mut state, &Event::Viewport { rows: 24, cols: 80 })?;
//! let (render, actions) = handle_event(&mut state, &Event::OpenSheet)?;
//! assert!(render);
//! assert!(matches!(actions[..], [Action::ScheduleFrame { .. }]));
//! # Ok::<(), sheetpane::SheetpaneError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::sheet::SheetHandle;

/// Events triggered by user input or the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Reports the pane size. The first one mounts the sheet.
    Viewport {
        /// Pane height in rows.
        rows: usize,
        /// Pane width in columns.
        cols: usize,
    },
    /// Opens the sheet (open button, `o`, `Enter`).
    OpenSheet,
    /// Closes the sheet (`c`, `Esc`).
    CloseSheet,
    /// Hides the plugin pane.
    CloseFocus,
    /// Mouse button pressed at a pane position.
    PointerDown {
        /// Pane line.
        line: isize,
        /// Pane column.
        col: usize,
    },
    /// Mouse moved with the button held.
    PointerDrag {
        /// Pane line.
        line: isize,
        /// Pane column.
        col: usize,
    },
    /// Mouse button released.
    PointerUp {
        /// Pane line.
        line: isize,
        /// Pane column.
        col: usize,
    },
    /// A requested animation frame fired.
    Frame {
        /// Seconds since the frame was requested.
        elapsed: f64,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns [`SheetpaneError::Config`](crate::SheetpaneError::Config) when a
/// viewport cannot host the sheet.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (render, mut actions) = match event {
        Event::Viewport { rows, cols } => (state.set_viewport(*rows, *cols)?, vec![]),
        Event::OpenSheet => {
            state.open();
            (true, vec![])
        }
        Event::CloseSheet => {
            state.close();
            (true, vec![])
        }
        Event::CloseFocus => return Ok((false, vec![Action::CloseFocus])),
        Event::PointerDown { line, col } => (state.pointer_down(*line, *col), vec![]),
        Event::PointerDrag { line, .. } => (state.pointer_drag(*line), vec![]),
        Event::PointerUp { line, col } => (state.pointer_up(*line, *col), vec![]),
        Event::Frame { elapsed } => (state.advance_frame(*elapsed), vec![]),
    };

    if let Some(frame) = state.request_frame() {
        tracing::trace!(?frame, "scheduling animation frame");
        actions.push(frame);
    }

    Ok((render, actions))
}
