//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences and
//! for blending two colors, which is how the backdrop dims the host screen.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! base_bg = "#1e1e2e"
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! button_fg = "#1e1e2e"
//! button_bg = "#89b4fa"
//! backdrop = "#000000"
//! sheet_bg = "#313244"
//! sheet_fg = "#cdd6f4"
//! handle = "#7f849c"
//! chip_bg = "#f5c2e7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use sheetpane::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let dimmed = Theme::blend(&theme.colors.text_normal, &theme.colors.backdrop, 0.5);
//! println!("{}dimmed{}", Theme::fg(&dimmed), Theme::reset());
//! ```

use crate::domain::{Result, SheetpaneError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Host screen background.
    pub base_bg: String,

    /// Header text color.
    pub header_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, disabled button).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Open button label color.
    pub button_fg: String,
    /// Open button fill.
    pub button_bg: String,

    /// Color the host screen fades toward under the backdrop.
    #[serde(default = "default_backdrop")]
    pub backdrop: String,

    /// Sheet panel fill.
    pub sheet_bg: String,
    /// Sheet panel text.
    pub sheet_fg: String,
    /// Drag handle bar.
    pub handle: String,
    /// Chip fill.
    pub chip_bg: String,
}

fn default_backdrop() -> String {
    "#000000".to_string()
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheetpane::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetpaneError::Io`] if the file cannot be read and
    /// [`SheetpaneError::Theme`] if its content does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| SheetpaneError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Mixes `base` toward `overlay` by `amount` and returns a hex color.
    ///
    /// `amount` is clamped to `[0, 1]`: `0` yields `base`, `1` yields
    /// `overlay`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheetpane::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::blend("#ffffff", "#000000", 0.5), "#808080");
    /// assert_eq!(Theme::blend("#102030", "#000000", 0.0), "#102030");
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::many_single_char_names
    )]
    pub fn blend(base: &str, overlay: &str, amount: f64) -> String {
        let t = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
        let (r0, g0, b0) = Self::hex_to_rgb(base);
        let (r1, g1, b1) = Self::hex_to_rgb(overlay);
        let mix = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        format!("#{:02x}{:02x}{:02x}", mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
