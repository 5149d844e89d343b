//! Sheetpane: a Zellij plugin hosting a draggable, spring-animated bottom sheet.
//!
//! Sheetpane provides:
//! - A bottom sheet that slides up from the pane bottom on `open()`
//! - Drag-to-dismiss with a dead zone and a half-height release threshold
//! - A backdrop that dims the host screen in proportion to the sheet position
//! - Tap-on-backdrop to close
//! - Spring animations driven by Zellij timer events

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event loop
//! │  - Event handling                                   │
//! │  - Hit-testing and frame scheduling                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Sheet Core (sheet/)      │   │ UI Layer (ui/)           │
//! │ - Position controller    │   │ - Rendering              │
//! │ - Gesture tracker        │   │ - Theming                │
//! │ - Spring animator        │   │ - Components             │
//! │ - Backdrop opacity       │   │                          │
//! └──────────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Error types
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`sheet`]: Bottom sheet core, independent of Zellij
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/sheetpane.wasm" {
//!         sheet_height "0.4"
//!         drag_threshold "0.5"
//!         stiffness "180"
//!         damping "24"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing
//!    - Create `AppState` with theme
//!    - Subscribe to key, mouse and timer events
//!
//! 2. **First Render**:
//!    - Report the pane size as `Event::Viewport`
//!    - Mount the sheet with `H = round(rows * sheet_height)`
//!
//! 3. **Interaction**:
//!    - Keys and clicks call `open()` / `close()`
//!    - Mouse hold samples drive the gesture tracker
//!    - `Timer` events advance the spring one frame at a time
//!
//! # Example
//!
//! ```rust
//! use sheetpane::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [Event::Viewport { rows: 24, cols: 80 }, Event::OpenSheet] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//! }
//! assert!(state.snapshot().is_some_and(|s| s.visible));
//! # Ok::<(), sheetpane::SheetpaneError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with mouse reporting

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod sheet;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Result, SheetpaneError};
pub use ui::Theme;

use sheet::{SheetConfig, SpringConfig};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/sheetpane.wasm" {
///     sheet_height "0.5"
///     backdrop_alpha "0.7"
///     open_on_load "true"
///     theme_file "~/.config/sheetpane/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sheet height as a fraction of the pane rows, in `(0, 1]`. Default: `0.4`
    pub sheet_height: f64,

    /// Rows a press must move before it becomes a drag. Default: `0.5`
    pub drag_threshold: f64,

    /// Spring stiffness. Default: `180.0`
    pub stiffness: f64,

    /// Spring damping. Default: `24.0`
    pub damping: f64,

    /// Seconds between animation frames. Default: `0.016`
    pub frame_interval: f64,

    /// Backdrop dim strength at full opacity, in `[0, 1]`. Default: `0.5`
    pub backdrop_alpha: f64,

    /// Open the sheet as soon as it is mounted. Default: `false`
    pub open_on_load: bool,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_height: 0.4,
            drag_threshold: sheet::DEFAULT_DRAG_THRESHOLD,
            stiffness: sheet::spring::DEFAULT_STIFFNESS,
            damping: sheet::spring::DEFAULT_DAMPING,
            frame_interval: 0.016,
            backdrop_alpha: 0.5,
            open_on_load: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Values that are missing or fail to parse fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use sheetpane::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sheet_height".to_string(), "0.5".to_string());
    /// map.insert("stiffness".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!((config.sheet_height - 0.5).abs() < f64::EPSILON);
    /// assert!((config.stiffness - 180.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let float = |key: &str, default: f64| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(default)
        };

        Self {
            sheet_height: float("sheet_height", defaults.sheet_height),
            drag_threshold: float("drag_threshold", defaults.drag_threshold),
            stiffness: float("stiffness", defaults.stiffness),
            damping: float("damping", defaults.damping),
            frame_interval: float("frame_interval", defaults.frame_interval),
            backdrop_alpha: float("backdrop_alpha", defaults.backdrop_alpha),
            open_on_load: config
                .get("open_on_load")
                .and_then(|s| s.trim().parse::<bool>().ok())
                .unwrap_or(defaults.open_on_load),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Checks numeric settings against their allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SheetpaneError::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let in_range = |ok: bool, key: &str, value: f64, range: &str| {
            if ok {
                Ok(())
            } else {
                Err(SheetpaneError::Config(format!(
                    "{key} must be {range}, got {value}"
                )))
            }
        };

        in_range(
            self.sheet_height > 0.0 && self.sheet_height <= 1.0,
            "sheet_height",
            self.sheet_height,
            "in (0, 1]",
        )?;
        in_range(
            self.drag_threshold >= 0.0,
            "drag_threshold",
            self.drag_threshold,
            "non-negative",
        )?;
        in_range(self.stiffness > 0.0, "stiffness", self.stiffness, "positive")?;
        in_range(self.damping >= 0.0, "damping", self.damping, "non-negative")?;
        in_range(
            self.frame_interval > 0.0,
            "frame_interval",
            self.frame_interval,
            "positive",
        )?;
        in_range(
            (0.0..=1.0).contains(&self.backdrop_alpha),
            "backdrop_alpha",
            self.backdrop_alpha,
            "in [0, 1]",
        )
    }

    /// Sheet constants for a pane of `rows` rows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheetpane::Config;
    ///
    /// let sheet = Config::default().sheet_config(25);
    /// assert!((sheet.height - 10.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sheet_config(&self, rows: usize) -> SheetConfig {
        SheetConfig::new((rows as f64 * self.sheet_height).round())
            .with_drag_threshold(self.drag_threshold)
            .with_spring(SpringConfig {
                stiffness: self.stiffness,
                damping: self.damping,
            })
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the loaded theme (from file, name, or
/// default). An invalid configuration is logged and replaced by the default
/// sheet settings; theme and trace settings are kept.
///
/// # Example
///
/// ```rust
/// use sheetpane::{Config, initialize};
///
/// let config = Config {
///     sheet_height: 7.0,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert!((state.config.sheet_height - 0.4).abs() < f64::EPSILON);
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing sheetpane plugin");

    let config = match config.validate() {
        Ok(()) => config.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "invalid configuration, using default sheet settings");
            Config {
                theme_name: config.theme_name.clone(),
                theme_file: config.theme_file.clone(),
                trace_level: config.trace_level.clone(),
                ..Config::default()
            }
        }
    };

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            let path = infrastructure::paths::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config, theme)
}
