//! Light and dark palettes plus ANSI escape helpers.
//!
//! Two palettes ship with the plugin (`themes/light.toml`, `themes/dark.toml`)
//! and either can be replaced by a TOML file named in the configuration.
//!
//! # TOML Format
//!
//! ```toml
//! name = "light"
//!
//! [colors]
//! header_fg = "#1e293b"
//! accent = "#2563eb"
//! selection_fg = "#ffffff"
//! selection_bg = "#2563eb"
//! text_normal = "#334155"
//! text_dim = "#94a3b8"
//! border = "#cbd5e1"
//! search_bar_border = "#2563eb"
//! match_highlight_fg = "#1e293b"
//! match_highlight_bg = "#fde68a"
//! tag_fg = "#1d4ed8"
//! empty_state_fg = "#64748b"
//! success_fg = "#15803d"
//! error_fg = "#b91c1c"
//! ```

use crate::domain::error::{FolioError, Result};
use crate::domain::page::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active navigation entry and focused controls.
    pub accent: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,
    pub border: String,
    pub search_bar_border: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Technology tags on project cards.
    pub tag_fg: String,

    pub empty_state_fg: String,
    pub success_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Parses the embedded palette for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Theme`] if the embedded TOML does not parse.
    pub fn builtin(mode: ThemeMode) -> Result<Self> {
        let toml_str = match mode {
            ThemeMode::Light => include_str!("../../themes/light.toml"),
            ThemeMode::Dark => include_str!("../../themes/dark.toml"),
        };

        toml::from_str(toml_str).map_err(|e| FolioError::Theme(format!("built-in {} theme: {e}", mode.as_str())))
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| FolioError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Grey-scale palette used only if a built-in palette fails to parse.
    fn monochrome(mode: ThemeMode) -> Self {
        let (strong, normal, dim, inverse) = match mode {
            ThemeMode::Light => ("#000000", "#303030", "#808080", "#ffffff"),
            ThemeMode::Dark => ("#ffffff", "#d0d0d0", "#808080", "#000000"),
        };

        Self {
            name: format!("{}-monochrome", mode.as_str()),
            colors: ThemeColors {
                header_fg: strong.to_string(),
                header_bg: None,
                accent: strong.to_string(),
                selection_fg: inverse.to_string(),
                selection_bg: strong.to_string(),
                text_normal: normal.to_string(),
                text_dim: dim.to_string(),
                border: dim.to_string(),
                search_bar_border: strong.to_string(),
                match_highlight_fg: inverse.to_string(),
                match_highlight_bg: normal.to_string(),
                tag_fg: strong.to_string(),
                empty_state_fg: dim.to_string(),
                success_fg: strong.to_string(),
                error_fg: strong.to_string(),
            },
        }
    }

    /// Converts `#rrggbb` to an RGB tuple, white on malformed input.
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

    /// 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence.
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

/// The pair of palettes the theme toggle switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeSet {
    /// Built-in palettes, each optionally replaced by a TOML file. A file that
    /// fails to load is logged and the built-in is kept.
    #[must_use]
    pub fn load(light_file: Option<&str>, dark_file: Option<&str>) -> Self {
        Self {
            light: Self::load_one(ThemeMode::Light, light_file),
            dark: Self::load_one(ThemeMode::Dark, dark_file),
        }
    }

    fn load_one(mode: ThemeMode, file: Option<&str>) -> Theme {
        if let Some(file) = file {
            match Theme::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %file, error = %e, "failed to load theme file, using built-in");
                }
            }
        }

        Theme::builtin(mode).unwrap_or_else(|e| {
            tracing::error!(error = %e, "built-in theme unavailable");
            Theme::monochrome(mode)
        })
    }

    #[must_use]
    pub const fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
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
    use std::io::Write;

    #[test]
    fn builtins_parse() {
        assert_eq!(Theme::builtin(ThemeMode::Light).unwrap().name, "light");
        assert_eq!(Theme::builtin(ThemeMode::Dark).unwrap().name, "dark");
    }

    #[test]
    fn override_file_replaces_one_palette() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::builtin(ThemeMode::Dark).unwrap();
        custom.name = "midnight".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let set = ThemeSet::load(None, Some(&path));
        assert_eq!(set.get(ThemeMode::Dark).name, "midnight");
        assert_eq!(set.get(ThemeMode::Light).name, "light");
    }

    #[test]
    fn unreadable_override_falls_back_to_builtin() {
        let set = ThemeSet::load(Some("/nonexistent/theme.toml"), None);
        assert_eq!(set.light.name, "light");
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("bogus"), "\u{1b}[48;2;255;255;255m");
    }
}
