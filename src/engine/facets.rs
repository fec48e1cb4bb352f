//! Facet state and its transitions.
//!
//! [`FacetState`] is the only mutable piece of a browsing session. The engine
//! reads it and never writes it; every change goes through one of the
//! transition methods below, called by the event handler.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which category the listing is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySelection {
    /// No category restriction.
    #[default]
    All,

    /// Only products whose `category_id` equals this id.
    ///
    /// Unknown ids are kept as-is and simply match nothing.
    Category(String),
}

impl CategorySelection {
    /// Parses a category parameter as it appears in a URL or command.
    ///
    /// Empty strings and `"all"` select [`CategorySelection::All`].
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// New products first.
    #[default]
    Latest,
    /// Effective price, ascending.
    PriceLow,
    /// Effective price, descending.
    PriceHigh,
    /// Discount percentage, descending.
    Discount,
}

impl SortOrder {
    /// All orders, in the order they are offered to the user.
    pub const ALL: [Self; 4] = [Self::Latest, Self::PriceLow, Self::PriceHigh, Self::Discount];

    /// Parses the wire name (`latest`, `price-low`, `price-high`, `discount`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "latest" => Some(Self::Latest),
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "discount" => Some(Self::Discount),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Discount => "discount",
        }
    }

    /// Display label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Latest => "최신순",
            Self::PriceLow => "낮은 가격순",
            Self::PriceHigh => "높은 가격순",
            Self::Discount => "할인율순",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The facets of one browsing session.
///
/// # Example
///
/// ```
/// use hellowshop::engine::{CategorySelection, FacetState, SortOrder};
///
/// let mut facets = FacetState::default();
/// facets.set_category(CategorySelection::from_param("wig"));
/// facets.toggle_anime("genshin");
/// facets.set_sort(SortOrder::PriceLow);
/// assert_eq!(facets.selected_anime, vec!["genshin".to_string()]);
///
/// facets.clear_all();
/// assert!(facets.active_category.is_all());
/// assert_eq!(facets.sort_order, SortOrder::PriceLow);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetState {
    pub active_category: CategorySelection,

    /// Selected anime ids in selection order, without duplicates.
    pub selected_anime: Vec<String>,

    pub search_query: String,

    pub sort_order: SortOrder,
}

impl FacetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Facets seeded from a `category` URL parameter.
    #[must_use]
    pub fn with_category(category: &str) -> Self {
        Self {
            active_category: CategorySelection::from_param(category),
            ..Self::default()
        }
    }

    /// Removes `id` from the selection if present, otherwise appends it.
    pub fn toggle_anime(&mut self, id: &str) {
        if let Some(pos) = self.selected_anime.iter().position(|a| a == id) {
            self.selected_anime.remove(pos);
        } else {
            self.selected_anime.push(id.to_string());
        }
        tracing::trace!(anime = id, selected = self.selected_anime.len(), "anime toggled");
    }

    /// Replaces the active category. The anime selection is kept.
    pub fn set_category(&mut self, category: CategorySelection) {
        tracing::trace!(category = ?category, "category set");
        self.active_category = category;
    }

    /// Selects `id`, or returns to [`CategorySelection::All`] if `id` is
    /// already the active category.
    pub fn toggle_category(&mut self, id: &str) {
        let next = match &self.active_category {
            CategorySelection::Category(current) if current == id => CategorySelection::All,
            _ => CategorySelection::from_param(id),
        };
        self.set_category(next);
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Resets category and anime selection. Sort order and query are kept.
    pub fn clear_all(&mut self) {
        self.active_category = CategorySelection::All;
        self.selected_anime.clear();
    }

    /// Starts a fresh search context.
    ///
    /// The query is trimmed. A non-empty query drops the category and anime
    /// selection and returns `true`; an empty one only clears the query.
    pub fn submit_search(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            self.search_query.clear();
            return false;
        }

        self.search_query = query.to_string();
        self.clear_all();
        true
    }

    #[must_use]
    pub fn is_anime_selected(&self, id: &str) -> bool {
        self.selected_anime.iter().any(|a| a == id)
    }

    /// Whether any category or anime restriction is active.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.active_category.is_all() || !self.selected_anime.is_empty()
    }
}
