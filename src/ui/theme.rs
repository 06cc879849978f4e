//! Theme management and ANSI escape sequence generation.
//!
//! The plugin has two display modes, `day` (light) and `night` (dark). Each
//! mode has a built-in palette and can be overridden with a custom TOML file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-night"
//!
//! [colors]
//! header_fg = "#ffffff"
//! selection_fg = "#0a0a14"
//! selection_bg = "#ffffff"
//! text_normal = "#ffffff"
//! text_dim = "#8a8aa0"
//! border = "#2a2a3a"
//! form_border = "#ffffff"
//! match_highlight_fg = "#0a0a14"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! button_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookconnect::ui::theme::{Theme, ThemeMode};
//!
//! let theme = Theme::builtin(ThemeMode::Night);
//! println!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "night");
//! ```

use crate::domain::error::{BookConnectError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const DAY_THEME: &str = include_str!("../../themes/day.toml");
const NIGHT_THEME: &str = include_str!("../../themes/night.toml");

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = BookConnectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "light" => Ok(Self::Day),
            "night" | "dark" => Ok(Self::Night),
            other => Err(BookConnectError::Config(format!("unknown theme mode: {other}"))),
        }
    }
}

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#0a0a14").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, author column and disabled controls.
    pub text_dim: String,

    pub border: String,

    /// Search, settings and detail overlay frames.
    pub form_border: String,
    /// Title query highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Enabled "show more" control.
    pub button_fg: String,
}

impl Theme {
    /// Returns the built-in palette for a mode.
    ///
    /// # Panics
    ///
    /// Panics if a bundled theme file fails to parse (should never occur).
    #[must_use]
    pub fn builtin(mode: ThemeMode) -> Self {
        let toml_str = match mode {
            ThemeMode::Day => DAY_THEME,
            ThemeMode::Night => NIGHT_THEME,
        };

        toml::from_str(toml_str).expect("bundled themes should always parse")
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Io`] if the file cannot be read, or
    /// [`BookConnectError::Theme`] if the TOML is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| BookConnectError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
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

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin(ThemeMode::default())
    }
}

/// The palettes for both display modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub day: Theme,
    pub night: Theme,
}

impl ThemeSet {
    /// Loads both palettes, using a custom file where given.
    ///
    /// A file that cannot be loaded is logged and replaced by the built-in palette.
    #[must_use]
    pub fn load(day_file: Option<&str>, night_file: Option<&str>) -> Self {
        Self {
            day: Self::load_one(ThemeMode::Day, day_file),
            night: Self::load_one(ThemeMode::Night, night_file),
        }
    }

    fn load_one(mode: ThemeMode, file: Option<&str>) -> Theme {
        file.map_or_else(
            || Theme::builtin(mode),
            |path| {
                Theme::from_file(path).unwrap_or_else(|e| {
                    tracing::debug!(mode = %mode, theme_file = %path, error = %e, "failed to load theme from file, using built-in");
                    Theme::builtin(mode)
                })
            },
        )
    }

    /// Palette for a mode.
    #[must_use]
    pub const fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Day => &self.day,
            ThemeMode::Night => &self.night,
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::load(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_parse() {
        assert_eq!(Theme::builtin(ThemeMode::Day).name, "day");
        assert_eq!(Theme::builtin(ThemeMode::Night).name, "night");
        assert!(Theme::builtin(ThemeMode::Night).colors.header_bg.is_some());
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("night".parse::<ThemeMode>().unwrap(), ThemeMode::Night);
        assert_eq!(" Day ".parse::<ThemeMode>().unwrap(), ThemeMode::Day);
        assert!("dusk".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Day.toggled(), ThemeMode::Night);
    }

    #[test]
    fn ansi_sequences() {
        assert_eq!(Theme::fg("#0a0a14"), "\u{1b}[38;2;10;10;20m");
        assert_eq!(Theme::bg("ffffff"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_file_overrides_one_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut custom = Theme::builtin(ThemeMode::Night);
        custom.name = "custom-night".to_string();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let set = ThemeSet::load(None, path.to_str());
        assert_eq!(set.get(ThemeMode::Night).name, "custom-night");
        assert_eq!(set.get(ThemeMode::Day).name, "day");
    }

    #[test]
    fn broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(BookConnectError::Theme(_))));
        let set = ThemeSet::load(path.to_str(), None);
        assert_eq!(set.day, Theme::builtin(ThemeMode::Day));
    }
}
