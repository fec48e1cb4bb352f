//! Catalog query engine.
//!
//! Every page (home, listing, search) goes through the same three entry
//! points so that filtering and ordering behave identically everywhere:
//!
//! - [`filter_and_sort`]: facet predicate, then stable sort
//! - [`search`]: free-text predicate over the whole catalog, catalog order
//! - [`project_counts`]: counts and chips for the current facets
//!
//! All of them are pure functions of the catalog and their arguments.
//!
//! # Example
//!
//! ```
//! use hellowshop::catalog::Catalog;
//! use hellowshop::engine::{self, FacetState, SortOrder};
//!
//! let catalog = Catalog::builtin()?;
//! let mut facets = FacetState::with_category("wig");
//! facets.set_sort(SortOrder::PriceLow);
//!
//! let wigs = engine::filter_and_sort(&catalog, &facets);
//! assert!(wigs.iter().all(|p| p.category_id == "wig"));
//!
//! let projection = engine::project_counts(&catalog, &facets);
//! assert_eq!(projection.total_count, wigs.len());
//! # Ok::<(), hellowshop::StorefrontError>(())
//! ```

pub mod facets;
pub mod filter;
pub mod highlights;
pub mod projection;
pub mod related;
pub mod sort;

pub use facets::{CategorySelection, FacetState, SortOrder};
pub use highlights::{best_sellers, new_arrivals};
pub use projection::{ChipKind, CountProjection, FilterChip};
pub use related::related_products;

use crate::catalog::Catalog;
use crate::domain::Product;

/// Products matching `facets`, ordered by `facets.sort_order`.
///
/// The search query is not applied here; see [`search`].
#[must_use]
pub fn filter_and_sort<'a>(catalog: &'a Catalog, facets: &FacetState) -> Vec<&'a Product> {
    let _span = tracing::debug_span!(
        "filter_and_sort",
        catalog_size = catalog.products().len(),
        category = ?facets.active_category,
        anime = facets.selected_anime.len(),
        order = %facets.sort_order
    )
    .entered();

    let matched: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| filter::matches(p, facets, catalog.anime_filters()))
        .collect();

    let result = sort::sorted(facets.sort_order, matched);
    tracing::debug!(matched = result.len(), "facet filter applied");
    result
}

/// Products matching every term of `query`, in catalog order.
///
/// A blank query yields no results.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    let terms = filter::tokenize(query);
    let _span = tracing::debug_span!("search", terms = terms.len()).entered();

    if terms.is_empty() {
        return Vec::new();
    }

    let result: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| {
            let category_name = catalog.category_name(&p.category_id).unwrap_or_default();
            filter::search_matches(p, category_name, &terms)
        })
        .collect();

    tracing::debug!(matched = result.len(), "search applied");
    result
}

/// Counts and chips for `facets`.
#[must_use]
pub fn project_counts(catalog: &Catalog, facets: &FacetState) -> CountProjection {
    let results = filter_and_sort(catalog, facets);
    projection::project(catalog, facets, &results)
}
