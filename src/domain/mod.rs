//! Domain layer for the sheetpane plugin.
//!
//! Holds types shared by every layer that do not depend on Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases

pub mod error;

pub use error::{Result, SheetpaneError};
