//! Raw catalog record types as they appear in the catalog data file.
//!
//! These types mirror the JSON shape (camelCase keys, optional flags) and are
//! kept separate from the domain records so that validation happens in one
//! place, when [`Catalog`](crate::catalog::Catalog) is built from them.

use serde::{Deserialize, Serialize};

/// Top-level catalog document.
///
/// ```json
/// {
///   "version": 1,
///   "categories": [{ "id": "wig", "name": "위그", "icon": "💇" }],
///   "animeFilters": [{ "id": "genshin", "name": "원신", "nameEn": "Genshin Impact", "tag": "원신" }],
///   "products": [{
///     "id": "3",
///     "name": "블루아카이브 아로나 위그",
///     "categoryId": "wig",
///     "originalPrice": 45000,
///     "salePrice": 39000,
///     "tags": ["블루아카이브", "아로나"],
///     "isNew": true,
///     "imageUrl": "/images/products/arona-wig.webp"
///   }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    /// Version of the data format.
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub categories: Vec<CategoryRecord>,

    #[serde(default)]
    pub anime_filters: Vec<AnimeRecord>,

    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

const fn default_version() -> u32 {
    1
}

/// A category entry. The product count is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// An anime filter entry. A missing `tag` marks a decorative entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// A product entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub original_price: u64,
    #[serde(default)]
    pub sale_price: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_best: bool,
    #[serde(default)]
    pub image_url: String,
}

impl ProductRecord {
    /// Creates a product record with no sale price, tags or flags.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        original_price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            original_price,
            sale_price: None,
            tags: Vec::new(),
            is_new: false,
            is_best: false,
            image_url: String::new(),
        }
    }
}
