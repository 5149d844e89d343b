//! User interface rendering layer with component-based architecture.
//!
//! This module turns a view model into ANSI-styled output. It draws the host
//! screen, the backdrop dim over it and the sliding sheet panel.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Per-row component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, centering)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{BackdropInfo, ButtonInfo, FooterInfo, HeaderInfo, PanelInfo, UIViewModel};
