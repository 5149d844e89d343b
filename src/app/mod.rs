//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the sheet core.
//! It maps pane positions to hit targets, owns the mounted sheet and decides
//! when animation frames are needed.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Timer Frames ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`layout`]: Row geometry shared by hit-testing and rendering
//! - [`pointer`]: Hit targets and press tracking
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use sheetpane::app::{AppState, Event, handle_event};
//! use sheetpane::{Config, Theme};
//!
//! let mut state = AppState::new(Config::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Viewport { rows: 24, cols: 80 })?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), sheetpane::SheetpaneError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod layout;
pub mod pointer;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use layout::Layout;
pub use pointer::HitTarget;
pub use state::AppState;
