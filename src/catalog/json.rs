//! JSON catalog sources.
//!
//! Two sources share the same document format ([`CatalogData`]): the default
//! storefront data embedded at compile time, and a user-supplied JSON file.

use crate::catalog::backend::CatalogSource;
use crate::catalog::models::CatalogData;
use crate::domain::error::Result;
use std::path::PathBuf;

/// Default storefront data, embedded from `data/catalog.json`.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// The catalog shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "builtin".to_string()
    }

    fn load(&self) -> Result<CatalogData> {
        parse_catalog(BUILTIN_CATALOG_JSON)
    }
}

/// A catalog read from a JSON file on disk.
///
/// # Examples
///
/// ```no_run
/// use hellowshop::catalog::{Catalog, JsonCatalog};
///
/// let catalog = Catalog::load(&JsonCatalog::new("/srv/shop/catalog.json"))?;
/// # Ok::<(), hellowshop::StorefrontError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogSource for JsonCatalog {
    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }

    fn load(&self) -> Result<CatalogData> {
        tracing::debug!(path = ?self.file_path, "reading catalog file");
        let contents = std::fs::read_to_string(&self.file_path)?;
        parse_catalog(&contents)
    }
}

/// Decodes a catalog document.
///
/// # Errors
///
/// Returns [`StorefrontError::Json`](crate::StorefrontError::Json) on malformed input.
pub fn parse_catalog(contents: &str) -> Result<CatalogData> {
    let data: CatalogData = serde_json::from_str(contents)?;

    tracing::debug!(
        version = data.version,
        products = data.products.len(),
        categories = data.categories.len(),
        anime_filters = data.anime_filters.len(),
        "decoded catalog data"
    );

    Ok(data)
}
