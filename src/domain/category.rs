//! Category and anime filter models.

use serde::{Deserialize, Serialize};

/// A product category such as costumes or wigs.
///
/// `count` is derived by the catalog at load time and equals the number of
/// products whose `category_id` is this category's `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: usize,
}

/// An anime or game series that products can be filtered by.
///
/// Entries without a `tag` are decorative: they are shown as filter chips
/// but never match a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeFilter {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    pub tag: Option<String>,
}

impl AnimeFilter {
    /// Returns `true` when this filter can never match any product.
    #[must_use]
    pub fn is_decorative(&self) -> bool {
        self.tag.as_deref().map_or(true, str::is_empty)
    }
}
