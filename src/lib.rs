//! BookConnect: a Zellij plugin for browsing a book catalog.
//!
//! BookConnect renders a catalog of books as an incrementally paged list:
//! - Search by title substring, author and genre
//! - "Show more" paging that appends batches to the list
//! - Detail view with author and publication year
//! - Day and night palettes, switchable at runtime

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
//! │  Application Layer (app/)                           │  ← Input modes
//! │  - Event handling                                   │  ← Search form
//! │  - Render instructions (actions)                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐          ┌───────────────────┐
//! │ Browsing Core         │          │ UI Layer          │
//! │ (browse/)             │          │ (ui/)             │
//! │ - Filter engine       │          │ - Rendering       │
//! │ - Pagination state    │          │ - Day/night theme │
//! │ - Render coordinator  │          │ - Components      │
//! │ - Selection resolver  │          │                   │
//! └───────────────────────┘          └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Book, catalog, criteria, errors (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → rotating trace file                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookconnect.wasm" {
//!         catalog_file "~/books/catalog.json"
//!         books_per_page "36"
//!         theme "night"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! Without `catalog_file` the bundled demo catalog is shown. A catalog file
//! that fails to load leaves the list empty with a message explaining why.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [Event::KeyDown, Event::ShowMore] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     for action in &actions {
//!         state.apply(action);
//!     }
//! }
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

pub mod app;
pub mod browse;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchField};
pub use browse::Browser;
pub use domain::{Book, BookConnectError, Catalog, FilterCriteria, Result};
pub use ui::{Theme, ThemeMode, ThemeSet};

use infrastructure::expand_tilde;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Plugin configuration parsed from Zellij's plugin configuration block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON file (sandbox path, `~` already expanded).
    /// `None` shows the bundled demo catalog.
    pub catalog_file: Option<String>,

    /// Overrides the catalog's page size when set.
    pub books_per_page: Option<usize>,

    /// Display mode applied at startup.
    pub theme: ThemeMode,

    /// Custom day palette TOML file.
    pub day_theme_file: Option<String>,

    /// Custom night palette TOML file.
    pub night_theme_file: Option<String>,

    /// `EnvFilter` directive for the trace file, e.g. `"debug"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's key-value map.
    ///
    /// Unknown keys are ignored and malformed values fall back to defaults,
    /// so a typo never prevents the plugin from loading.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let path = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(expand_tilde)
        };

        let books_per_page = config
            .get("books_per_page")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0);

        let theme = config
            .get("theme")
            .and_then(|s| {
                s.parse::<ThemeMode>()
                    .map_err(|e| tracing::debug!(error = %e, "ignoring theme setting"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            catalog_file: path("catalog_file"),
            books_per_page,
            theme,
            day_theme_file: path("day_theme_file"),
            night_theme_file: path("night_theme_file"),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Loads the catalog named by the configuration.
///
/// Uses the demo catalog when no file is configured. A catalog that cannot
/// be loaded is logged and replaced by an empty one, which the UI reports.
#[must_use]
pub fn load_catalog(config: &Config) -> Catalog {
    let loaded = config
        .catalog_file
        .as_ref()
        .map_or_else(Catalog::demo, Catalog::from_file);

    let catalog = loaded.unwrap_or_else(|e| {
        tracing::warn!(catalog_file = ?config.catalog_file, error = %e, "failed to load catalog, starting empty");
        Catalog::empty(domain::DEFAULT_BOOKS_PER_PAGE)
    });

    match config.books_per_page {
        Some(page_size) => {
            let fallback = catalog.clone();
            catalog.with_page_size(page_size).unwrap_or_else(|e| {
                tracing::debug!(books_per_page = page_size, error = %e, "ignoring page size override");
                fallback
            })
        }
        None => catalog,
    }
}

/// Builds the initial application state: catalog, palettes and startup frame.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookconnect plugin");

    let catalog = load_catalog(config);
    tracing::debug!(
        books = catalog.books().len(),
        authors = catalog.authors().len(),
        genres = catalog.genres().len(),
        page_size = catalog.page_size(),
        "catalog ready"
    );

    let themes = ThemeSet::load(
        config.day_theme_file.as_deref(),
        config.night_theme_file.as_deref(),
    );

    AppState::new(Arc::new(catalog), themes, config.theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn config_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, ThemeMode::Day);
    }

    #[test]
    fn config_parses_values() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "~/books.json"),
            ("books_per_page", " 12 "),
            ("theme", "Night"),
            ("night_theme_file", "/themes/n.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.catalog_file.as_deref(), Some("/host/books.json"));
        assert_eq!(config.books_per_page, Some(12));
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.night_theme_file.as_deref(), Some("/themes/n.toml"));
        assert_eq!(config.day_theme_file, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn config_ignores_bad_values() {
        let config = Config::from_zellij(&map(&[
            ("books_per_page", "0"),
            ("theme", "sepia"),
            ("catalog_file", "  "),
        ]));

        assert_eq!(config.books_per_page, None);
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.catalog_file, None);
    }

    #[test]
    fn initialize_uses_demo_by_default() {
        let state = initialize(&Config::default());
        assert_eq!(state.browser.catalog().books().len(), 16);
        assert_eq!(state.items.len(), 6);
    }

    #[test]
    fn initialize_applies_page_size_and_theme() {
        let config = Config {
            books_per_page: Some(4),
            theme: ThemeMode::Night,
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.items.len(), 4);
        assert_eq!(state.show_more.remaining, 12);
        assert_eq!(state.theme().name, "night");
    }

    #[test]
    fn loads_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "books_per_page": 1,
                "authors": {{ "a1": "Ann" }},
                "genres": {{ "g1": "Poetry" }},
                "books": [
                    {{ "id": "b1", "title": "One", "author": "a1", "image": "",
                       "published": "2001-01-01T00:00:00Z", "description": "", "genres": ["g1"] }},
                    {{ "id": "b2", "title": "Two", "author": "a1", "image": "",
                       "published": "2002-01-01T00:00:00Z", "description": "", "genres": ["g1"] }}
                ]
            }}"#
        )
        .unwrap();

        let config = Config {
            catalog_file: Some(file.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].author_name, "Ann");
        assert!(state.show_more.enabled);
    }

    #[test]
    fn missing_catalog_starts_empty() {
        let config = Config {
            catalog_file: Some("/definitely/not/here.json".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert!(state.browser.catalog().books().is_empty());
        assert!(state.items.is_empty());
        assert!(state.compute_viewmodel(24, 80).empty_state.is_some());
    }
}
