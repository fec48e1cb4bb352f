//! Query projection: counts and indicators derived from a result set.
//!
//! A [`CountProjection`] is what the views need besides the products
//! themselves: how many matched, the category tab counts, the anime counts,
//! the "no results" signal and the active filter chips.

use crate::catalog::Catalog;
use crate::domain::Product;
use crate::engine::facets::{CategorySelection, FacetState};
use serde::Serialize;

/// Label used for the unrestricted category.
pub const ALL_CATEGORIES_LABEL: &str = "전체";

/// Product count of one category tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: usize,
    pub active: bool,
}

/// Number of current results carrying one anime's tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimeCount {
    pub id: String,
    pub name: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChipKind {
    Category,
    Anime,
}

/// One removable entry of the active filter indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub kind: ChipKind,
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountProjection {
    /// Length of the result sequence.
    pub total_count: usize,

    /// Size of the whole catalog, shown on the "all" tab.
    pub catalog_count: usize,

    /// Per-category counts over the full catalog, in catalog order.
    pub per_category_count: Vec<CategoryCount>,

    /// Per-anime counts over the current results, in catalog order.
    pub per_anime_count: Vec<AnimeCount>,

    /// Active filters in display order.
    pub chips: Vec<FilterChip>,

    /// Header label for the active category.
    pub category_label: String,
}

impl CountProjection {
    /// Whether the result set is empty (the "no results" state).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    #[must_use]
    pub fn category_count(&self, id: &str) -> Option<usize> {
        self.per_category_count.iter().find(|c| c.id == id).map(|c| c.count)
    }

    #[must_use]
    pub fn anime_count(&self, id: &str) -> Option<usize> {
        self.per_anime_count.iter().find(|a| a.id == id).map(|a| a.count)
    }
}

/// Builds the projection for `results`, which must be the engine's output
/// for `facets`.
#[must_use]
pub fn project(catalog: &Catalog, facets: &FacetState, results: &[&Product]) -> CountProjection {
    let active_id = facets.active_category.id();

    let per_category_count = catalog
        .categories()
        .iter()
        .map(|c| CategoryCount {
            id: c.id.clone(),
            name: c.name.clone(),
            icon: c.icon.clone(),
            count: c.count,
            active: active_id == Some(c.id.as_str()),
        })
        .collect();

    let per_anime_count = catalog
        .anime_filters()
        .iter()
        .map(|a| AnimeCount {
            id: a.id.clone(),
            name: a.name.clone(),
            count: match a.tag.as_deref() {
                Some(tag) if !tag.is_empty() => {
                    results.iter().filter(|p| p.has_tag_containing(tag)).count()
                }
                _ => 0,
            },
            selected: facets.is_anime_selected(&a.id),
        })
        .collect();

    CountProjection {
        total_count: results.len(),
        catalog_count: catalog.products().len(),
        per_category_count,
        per_anime_count,
        chips: active_filter_chips(catalog, facets),
        category_label: category_label(catalog, &facets.active_category),
    }
}

/// Category chip first (when restricted), then anime chips in selection
/// order. Unknown anime ids fall back to the id as label.
#[must_use]
pub fn active_filter_chips(catalog: &Catalog, facets: &FacetState) -> Vec<FilterChip> {
    let mut chips = Vec::with_capacity(facets.selected_anime.len() + 1);

    if let CategorySelection::Category(id) = &facets.active_category {
        chips.push(FilterChip {
            kind: ChipKind::Category,
            id: id.clone(),
            label: catalog.category_name(id).unwrap_or(id.as_str()).to_string(),
        });
    }

    chips.extend(facets.selected_anime.iter().map(|id| FilterChip {
        kind: ChipKind::Anime,
        id: id.clone(),
        label: catalog.anime(id).map_or_else(|| id.clone(), |a| a.name.clone()),
    }));

    chips
}

/// Display name of the active category, or [`ALL_CATEGORIES_LABEL`].
#[must_use]
pub fn category_label(catalog: &Catalog, category: &CategorySelection) -> String {
    category
        .id()
        .and_then(|id| catalog.category_name(id))
        .unwrap_or(ALL_CATEGORIES_LABEL)
        .to_string()
}
