//! Hellow Shop: a cosplay and anime goods storefront in the terminal.
//!
//! The crate is a catalog engine with a thin interactive shell around it:
//! - Product catalog loaded from JSON (embedded or user-supplied)
//! - Faceted browsing by category and anime with four stable sort orders
//! - Tokenized search with match highlighting and suggested terms
//! - Live per-category and per-anime counts and active filter chips
//! - Cart with quantity updates, sale discounts and a free shipping threshold
//! - Rotating home banner, best seller and new arrival sections
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive shell (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Routes and pages                                 │
//! │  - Event handling, actions                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Cart          │
//! │ (ui/)         │   │ (engine/)     │   │ (cart/)       │
//! │ - Rendering   │   │ - Facets      │   │ - Lines       │
//! │ - Theming     │   │ - Filter/sort │   │ - Totals      │
//! │ - Components  │   │ - Counts      │   │ - Shipping    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/) and Domain (domain/)            │
//! │  - JSON sources, validation                         │
//! │  - Product, Category, AnimeFilter, errors           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Page state machine with event/action model
//! - [`cart`]: Cart lines, totals and shipping policy
//! - [`catalog`]: Catalog sources and the validated in-memory catalog
//! - [`domain`]: Core domain types and errors
//! - [`engine`]: Facet state, filtering, sorting and count projection
//! - [`infrastructure`]: Platform paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Configuration is a flat TOML table; every key is optional:
//!
//! ```toml
//! catalog_file = "~/shop/catalog.json"
//! theme = "midnight"
//! trace_level = "debug"
//! free_shipping_threshold = 50000
//! shipping_fee = 3000
//! suggested_terms = "원신,미쿠,위그"
//! ```
//!
//! # Example
//!
//! ```rust
//! use hellowshop::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! handle_event(&mut state, &Event::Navigate("/products?category=wig".into()))?;
//! assert_eq!(state.listing_results().len(), 3);
//!
//! handle_event(&mut state, &Event::AddToCart { product_id: "4".into(), quantity: 1 })?;
//! assert_eq!(state.cart.item_count(), 1);
//! # Ok::<(), hellowshop::StorefrontError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Page, Route};
pub use catalog::Catalog;
pub use domain::{Result, StorefrontError};
pub use engine::{FacetState, SortOrder};
pub use ui::Theme;

use cart::shipping::{DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_SHIPPING_FEE};
use catalog::JsonCatalog;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_BANNER_INTERVAL_SECS: u64 = 5;
const DEFAULT_HOME_SECTION_SIZE: usize = 4;
const DEFAULT_RELATED_LIMIT: usize = 4;
const DEFAULT_SUGGESTED_TERMS: [&str; 5] = ["원신", "블루아카이브", "미쿠", "코스튬", "위그"];

/// Storefront configuration.
///
/// Built from a string map ([`Config::from_map`]) so every source (TOML
/// file, command line) goes through the same parsing and fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog to load instead of the embedded one.
    pub catalog_file: Option<PathBuf>,

    /// Built-in theme name: `sakura` or `midnight`. Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Seconds between automatic banner advances. Default: 5
    pub banner_interval_secs: u64,

    /// Cart total at which shipping becomes free, in won. Default: 50000
    pub free_shipping_threshold: u64,

    /// Flat shipping fee below the threshold, in won. Default: 3000
    pub shipping_fee: u64,

    /// Products shown in each home section. Default: 4
    pub home_section_size: usize,

    /// Related products shown on a detail page. Default: 4
    pub related_limit: usize,

    /// Terms offered when a search finds nothing.
    pub suggested_terms: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            banner_interval_secs: DEFAULT_BANNER_INTERVAL_SECS,
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            shipping_fee: DEFAULT_SHIPPING_FEE,
            home_section_size: DEFAULT_HOME_SECTION_SIZE,
            related_limit: DEFAULT_RELATED_LIMIT,
            suggested_terms: DEFAULT_SUGGESTED_TERMS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_file`: String → `PathBuf`, `~` expanded
    /// - `theme`, `theme_file`, `trace_level`: String → `Option<String>`
    /// - numeric keys: parsed, falling back to the default on error
    /// - `suggested_terms`: Comma-separated string → `Vec<String>` (filters
    ///   empty values)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use hellowshop::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("shipping_fee".to_string(), "2500".to_string());
    /// map.insert("related_limit".to_string(), "lots".to_string());
    /// map.insert("suggested_terms".to_string(), "원신, 미쿠".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.shipping_fee, 2500);
    /// assert_eq!(config.related_limit, 4);
    /// assert_eq!(config.suggested_terms, vec!["원신", "미쿠"]);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let suggested_terms = config
            .get("suggested_terms")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty())
            .unwrap_or(defaults.suggested_terms);

        Self {
            catalog_file: config
                .get("catalog_file")
                .map(|p| infrastructure::paths::expand_tilde(p)),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            banner_interval_secs: parse_or(config, "banner_interval_secs", defaults.banner_interval_secs),
            free_shipping_threshold: parse_or(
                config,
                "free_shipping_threshold",
                defaults.free_shipping_threshold,
            ),
            shipping_fee: parse_or(config, "shipping_fee", defaults.shipping_fee),
            home_section_size: parse_or(config, "home_section_size", defaults.home_section_size),
            related_limit: parse_or(config, "related_limit", defaults.related_limit),
            suggested_terms,
        }
    }

    /// Reads a flat TOML table and parses it with [`Config::from_map`].
    ///
    /// Scalar values of any TOML type are accepted; arrays are joined with
    /// commas so `suggested_terms = ["원신", "미쿠"]` works too.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Config`] if the file cannot be read or is
    /// not valid TOML.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_map(&read_config_map(path)?))
    }
}

/// Reads a flat TOML table into the string map [`Config::from_map`] takes,
/// so callers can layer overrides on top before parsing.
///
/// # Errors
///
/// Returns [`StorefrontError::Config`] if the file cannot be read or is not
/// valid TOML.
pub fn read_config_map<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| StorefrontError::Config(format!("{}: {e}", path.display())))?;
    let table: toml::Table = toml::from_str(&content)
        .map_err(|e| StorefrontError::Config(format!("{}: {e}", path.display())))?;

    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_value_to_string(value)))
        .collect())
}

fn parse_or<T: std::str::FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    config
        .get(key)
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn toml_value_to_string(value: toml::Value) -> String {
    match value {
        toml::Value::String(s) => s,
        toml::Value::Array(items) => items
            .into_iter()
            .map(toml_value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Builds the application state from configuration.
///
/// Loads the catalog (from `catalog_file` when set, otherwise the embedded
/// one) and resolves the theme: `theme_file`, then `theme`, then the
/// default. A theme that fails to load falls back to the default; a catalog
/// that fails to load is an error.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read, parsed or
/// validated.
///
/// # Example
///
/// ```rust
/// use hellowshop::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("midnight".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config)?;
/// assert_eq!(state.theme.name, "midnight");
/// # Ok::<(), hellowshop::StorefrontError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing storefront");

    let catalog = match &config.catalog_file {
        Some(path) => Catalog::load(&JsonCatalog::new(path))?,
        None => Catalog::builtin()?,
    };
    tracing::info!(
        products = catalog.products().len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    Ok(AppState::new(catalog, theme, config))
}
