//! Folio: a personal portfolio page as a Zellij plugin.
//!
//! The page has four sections (Home, About, Projects, Contact), a light/dark
//! theme toggle that remembers its choice, a project catalog with search,
//! category filter and sort, and a contact form with per-field validation
//! whose submissions are stored locally.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions, view models             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Key-value   │   │ - Catalog     │
//! │ - Themes      │   │ - JSON file   │   │ - Theme pref  │
//! │ - Components  │   │ - Records     │   │ - Submissions │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and paths (infrastructure/)       │
//! │  - Projects, catalog sources, pipeline              │
//! │  - Contact validation, sections, greeting           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Tracing is set up by `observability` on both threads.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/folio.wasm" {
//!         catalog_file "~/portfolio/projects.json"
//!         catalog_delay_ms "1000"
//!         submit_delay_ms "2000"
//!         default_theme "dark"
//!         start_section "projects"
//!         date_format "%Y-%m-%d"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Startup
//!
//! 1. `main.rs` parses the configuration and calls [`initialize`].
//! 2. `Event::Start` asks the worker for the stored theme and the catalog.
//! 3. The worker answers with `WorkerResponse`s, which the handler folds
//!    into state; the current search, filter and sort apply to the catalog
//!    as soon as it arrives.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Latency, Settings};
pub use domain::{FolioError, ProjectRecord, Result, Section, ThemeMode};
pub use ui::{Theme, ThemeSet};

use app::state::DEFAULT_DATE_FORMAT;
use chrono::format::{Item, StrftimeItems};
use infrastructure::expand_tilde;
use std::collections::BTreeMap;

const DEFAULT_CATALOG_DELAY_MS: u64 = 1_000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2_000;

/// Plugin configuration from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to load instead of the built-in sample.
    pub catalog_file: Option<String>,

    /// Simulated latency of the catalog load. Default: 1000
    pub catalog_delay_ms: u64,

    /// Simulated latency of a contact submission. Default: 2000
    pub submit_delay_ms: u64,

    /// Theme used until a stored preference is found. Default: light
    pub default_theme: ThemeMode,

    /// Section shown on load, given by anchor (`home`, `#projects`, ...).
    pub start_section: Section,

    /// TOML palettes replacing the built-in ones. See [`ui::theme`].
    pub light_theme_file: Option<String>,
    pub dark_theme_file: Option<String>,

    /// `strftime` pattern for project dates. Default: `%-m/%-d/%Y`
    pub date_format: String,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            catalog_delay_ms: DEFAULT_CATALOG_DELAY_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            default_theme: ThemeMode::Light,
            start_section: Section::Home,
            light_theme_file: None,
            dark_theme_file: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Unparseable numbers, unknown theme names and invalid date formats fall
    /// back to their defaults. Blank values count as absent.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let millis = |key: &str, fallback: u64| {
            get(key).and_then(|v| v.parse::<u64>().ok()).unwrap_or(fallback)
        };

        let default_theme = get("default_theme")
            .and_then(|v| match v.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!(error = %FolioError::Config(e), "ignoring default_theme");
                    None
                }
            })
            .unwrap_or(defaults.default_theme);

        let start_section = get("start_section")
            .and_then(|anchor| {
                let section = Section::from_anchor(&anchor);
                if section.is_none() {
                    tracing::warn!(start_section = %anchor, "unknown section anchor");
                }
                section
            })
            .unwrap_or(defaults.start_section);

        let date_format = get("date_format")
            .filter(|f| {
                let valid = is_valid_date_format(f);
                if !valid {
                    let e = FolioError::Config(format!("invalid date_format {f:?}"));
                    tracing::warn!(error = %e, "using default date format");
                }
                valid
            })
            .unwrap_or(defaults.date_format);

        Self {
            catalog_file: get("catalog_file").map(|f| expand_tilde(&f)),
            catalog_delay_ms: millis("catalog_delay_ms", defaults.catalog_delay_ms),
            submit_delay_ms: millis("submit_delay_ms", defaults.submit_delay_ms),
            default_theme,
            start_section,
            light_theme_file: get("light_theme_file").map(|f| expand_tilde(&f)),
            dark_theme_file: get("dark_theme_file").map(|f| expand_tilde(&f)),
            date_format,
            trace_level: get("trace_level"),
        }
    }

    /// The runtime subset of the configuration held in [`AppState`].
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            catalog_file: self.catalog_file.clone(),
            latency: Latency {
                catalog_ms: self.catalog_delay_ms,
                submit_ms: self.submit_delay_ms,
            },
            date_format: self.date_format.clone(),
        }
    }
}

fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Builds the initial state: palettes loaded, default theme applied, catalog
/// pending. Send `Event::Start` next.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(default_theme = %config.default_theme.as_str(), "initializing folio");

    let themes = ThemeSet::load(config.light_theme_file.as_deref(), config.dark_theme_file.as_deref());
    let mut state = AppState::new(config.settings(), themes, config.default_theme);
    state.section = config.start_section;
    state.menu_cursor = config.start_section;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_option() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "~/projects.json"),
            ("catalog_delay_ms", "0"),
            ("submit_delay_ms", "250"),
            ("default_theme", "dark"),
            ("start_section", "#projects"),
            ("dark_theme_file", "/themes/night.toml"),
            ("date_format", "%Y-%m-%d"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.catalog_file.as_deref(), Some("/host/projects.json"));
        assert_eq!(config.catalog_delay_ms, 0);
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert_eq!(config.start_section, Section::Projects);
        assert_eq!(config.light_theme_file, None);
        assert_eq!(config.dark_theme_file.as_deref(), Some("/themes/night.toml"));
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("catalog_delay_ms", "soon"),
            ("submit_delay_ms", "-5"),
            ("default_theme", "sepia"),
            ("start_section", "blog"),
            ("date_format", "%Q"),
            ("catalog_file", "   "),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn settings_carry_latency_and_format() {
        let config = Config {
            catalog_delay_ms: 10,
            submit_delay_ms: 20,
            ..Config::default()
        };
        let settings = config.settings();
        assert_eq!(
            settings.latency,
            Latency {
                catalog_ms: 10,
                submit_ms: 20
            }
        );
        assert_eq!(settings.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn initialize_applies_the_default_theme() {
        let config = Config {
            default_theme: ThemeMode::Dark,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(state.theme().name, "dark");
        assert_eq!(state.section, Section::Home);
    }

    #[test]
    fn initialize_opens_the_start_section() {
        let config = Config {
            start_section: Section::Contact,
            ..Config::default()
        };
        assert_eq!(initialize(&config).section, Section::Contact);
    }
}
