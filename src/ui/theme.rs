//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents with a name and a color table. Two themes are
//! built in; custom ones are loaded from a file.
//!
//! # Built-in Themes
//!
//! - `sakura`: pink and purple storefront palette (default)
//! - `midnight`: the same accents on a dark background
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! header_bg = "#ff6b9d"
//! accent = "#ff6b9d"
//! accent_alt = "#9c27b0"
//! text_normal = "#2d2d2d"
//! text_dim = "#8a8a8a"
//! border = "#e0e0e0"
//! price_fg = "#2d2d2d"
//! sale_fg = "#e53935"
//! badge_new_fg = "#00bcd4"
//! badge_best_fg = "#ff9800"
//! chip_fg = "#ffffff"
//! chip_bg = "#9c27b0"
//! match_highlight_fg = "#2d2d2d"
//! match_highlight_bg = "#ffe082"
//! empty_state_fg = "#9c27b0"
//! ```

use crate::domain::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "sakura";

/// Color scheme for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active tabs, selected anime, call-to-action.
    pub accent: String,
    /// Secondary accent for banners and section titles.
    pub accent_alt: String,

    pub text_normal: String,
    /// Footer, counts, original prices.
    pub text_dim: String,

    pub border: String,

    pub price_fg: String,
    /// Discount percentage.
    pub sale_fg: String,

    pub badge_new_fg: String,
    pub badge_best_fg: String,

    /// Active filter chips.
    pub chip_fg: String,
    pub chip_bg: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "sakura" => include_str!("../../themes/sakura.toml"),
            "midnight" => include_str!("../../themes/midnight.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Theme`] if the file cannot be read or is not
    /// a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| StorefrontError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| StorefrontError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape (`\x1b[48;2;r;g;bm`).
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

    /// Strike-through, used for original prices.
    #[must_use]
    pub const fn strike() -> &'static str {
        "\u{001b}[9m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `sakura` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in sakura theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["sakura", "midnight"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("catppuccin").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#ff6b9d"), "\u{1b}[38;2;255;107;157m");
        assert_eq!(Theme::bg("9c27b0"), "\u{1b}[48;2;156;39;176m");
        assert_eq!(Theme::fg("#fff"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_file() {
        let builtin = Theme::default();
        let mut custom = builtin.clone();
        custom.name = "custom".into();
        custom.colors.accent = "#123456".into();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, custom);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = 42").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(StorefrontError::Theme(_))));
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(StorefrontError::Theme(_))
        ));
    }
}
