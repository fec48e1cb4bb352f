//! Application state for one browsing session.
//!
//! [`AppState`] owns the catalog, the per-page facet states, the cart and the
//! banner carousel. The catalog is read-only; everything else changes only
//! through the methods below, which the event handler calls one event at a
//! time.
//!
//! # State Components
//!
//! - **Catalog**: validated products, categories and anime filters
//! - **Home facets**: quick category toggle and anime cards on the home page
//! - **Facets**: listing tabs, anime filters, sort order and search query
//! - **Page**: what is currently on screen, derived from the route
//! - **Cart**: session cart with its shipping policy
//! - **Banners**: hero carousel position
//!
//! # Example
//!
//! ```
//! use hellowshop::app::{AppState, Route};
//! use hellowshop::catalog::Catalog;
//! use hellowshop::{Config, Theme};
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default(), &Config::default());
//! state.navigate(&Route::parse("/products?category=wig"))?;
//! assert!(state.listing_results().iter().all(|p| p.category_id == "wig"));
//! # Ok::<(), hellowshop::StorefrontError>(())
//! ```

use super::banner::BannerCarousel;
use super::modes::Page;
use super::routes::Route;
use crate::cart::{Cart, ShippingPolicy};
use crate::catalog::Catalog;
use crate::domain::error::Result;
use crate::domain::Product;
use crate::engine::{self, FacetState};
use crate::ui::theme::Theme;
use crate::Config;

/// Presentation settings taken from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Products per home page section.
    pub home_section_size: usize,
    /// Related products on the detail page.
    pub related_limit: usize,
    /// Terms offered when a search finds nothing.
    pub suggested_terms: Vec<String>,
}

impl From<&Config> for StoreSettings {
    fn from(config: &Config) -> Self {
        Self {
            home_section_size: config.home_section_size,
            related_limit: config.related_limit,
            suggested_terms: config.suggested_terms.clone(),
        }
    }
}

/// Central state container.
///
/// Holds everything needed to compute the next frame. The renderer reads
/// it through [`compute_viewmodel`](AppState::compute_viewmodel) and never
/// mutates it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validated catalog, fixed for the lifetime of the session.
    pub catalog: Catalog,

    /// Section sizes and search suggestions.
    pub settings: StoreSettings,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Last route navigated to.
    pub route: Route,

    /// Page currently on screen. Usually follows `route`, except for
    /// not-found which keeps the requested route.
    pub page: Page,

    /// Facets of the home page grid. Categories toggle here.
    pub home_facets: FacetState,

    /// Facets of the listing and search pages.
    pub facets: FacetState,

    /// Session cart, priced with the configured shipping policy.
    pub cart: Cart,

    /// Hero banner position, advanced by the driver's timer.
    pub banners: BannerCarousel,
}

impl AppState {
    /// Creates a session on the home page with an empty cart.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Already validated catalog
    /// * `theme` - Resolved color scheme
    /// * `config` - Source of the shipping policy and [`StoreSettings`]
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, config: &Config) -> Self {
        Self {
            catalog,
            settings: StoreSettings::from(config),
            theme,
            route: Route::Home,
            page: Page::Home,
            home_facets: FacetState::default(),
            facets: FacetState::default(),
            cart: Cart::with_policy(ShippingPolicy {
                free_threshold: config.free_shipping_threshold,
                flat_fee: config.shipping_fee,
            }),
            banners: BannerCarousel::default(),
        }
    }

    /// Shows the page for `route`.
    ///
    /// Listing and search routes seed fresh facets from their URL parameters,
    /// the way a page load would. Home keeps its own facets, so returning to
    /// `/` restores the previous quick filters.
    ///
    /// # Parameters
    ///
    /// * `route` - Parsed location, see [`Route::parse`]
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`](crate::StorefrontError::ProductNotFound) for a detail route with an
    /// unknown id. The route is still recorded.
    pub fn navigate(&mut self, route: &Route) -> Result<()> {
        let _span = tracing::debug_span!("navigate", route = %route).entered();
        self.route = route.clone();

        match route {
            Route::Home => self.page = Page::Home,
            Route::Products { category } => {
                self.facets = FacetState::default();
                self.facets.set_category(category.clone());
                self.page = Page::Listing;
            }
            Route::ProductDetail { id } => return self.open_product(id),
            Route::Search { query } => {
                self.facets.submit_search(query);
                self.page = Page::Search;
            }
            Route::Cart => self.page = Page::Cart,
        }
        Ok(())
    }

    /// Shows the detail page of `id` with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`](crate::StorefrontError::ProductNotFound) if `id` is unknown; the
    /// page is left unchanged.
    pub fn open_product(&mut self, id: &str) -> Result<()> {
        self.catalog.require_product(id)?;
        self.route = Route::ProductDetail { id: id.to_string() };
        self.page = Page::Detail {
            product_id: id.to_string(),
            quantity: 1,
        };
        Ok(())
    }

    /// Switches to the not-found page for `requested_id`.
    pub fn show_not_found(&mut self, requested_id: &str) {
        tracing::debug!(requested_id, "product not found");
        self.page = Page::NotFound {
            requested_id: requested_id.to_string(),
        };
    }

    /// Product shown on the detail page, if any.
    #[must_use]
    pub fn detail_product(&self) -> Option<&Product> {
        match &self.page {
            Page::Detail { product_id, .. } => self.catalog.product(product_id),
            _ => None,
        }
    }

    /// Sets the detail page quantity, clamped to at least 1.
    ///
    /// # Parameters
    ///
    /// * `quantity` - Requested value; anything below 1 becomes 1 and values
    ///   past `u32::MAX` saturate
    ///
    /// # Returns
    ///
    /// `true` if the page is a detail page and the quantity was stored,
    /// `false` otherwise.
    pub fn set_detail_quantity(&mut self, quantity: i64) -> bool {
        let Page::Detail { quantity: current, .. } = &mut self.page else {
            return false;
        };
        *current = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        true
    }

    /// Adds `quantity` of product `id` to the cart.
    ///
    /// # Returns
    ///
    /// The catalog product that was added, for the confirmation notice.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`](crate::StorefrontError::ProductNotFound) for an unknown id.
    pub fn add_to_cart(&mut self, id: &str, quantity: u32) -> Result<&Product> {
        let product = self.catalog.require_product(id)?;
        self.cart.add(product, quantity);
        Ok(product)
    }

    /// Facets of the page currently shown.
    ///
    /// The home page has its own facet state; every other page shares the
    /// listing facets.
    #[must_use]
    pub fn active_facets(&self) -> &FacetState {
        match self.page {
            Page::Home => &self.home_facets,
            _ => &self.facets,
        }
    }

    /// Mutable facets of the page currently shown.
    pub fn active_facets_mut(&mut self) -> &mut FacetState {
        match self.page {
            Page::Home => &mut self.home_facets,
            _ => &mut self.facets,
        }
    }

    /// Products for the home page "all products" grid.
    #[must_use]
    pub fn home_results(&self) -> Vec<&Product> {
        engine::filter_and_sort(&self.catalog, &self.home_facets)
    }

    /// Filtered and sorted products for the listing page.
    #[must_use]
    pub fn listing_results(&self) -> Vec<&Product> {
        engine::filter_and_sort(&self.catalog, &self.facets)
    }

    /// Search matches in catalog order. Empty for a blank query.
    #[must_use]
    pub fn search_results(&self) -> Vec<&Product> {
        engine::search(&self.catalog, &self.facets.search_query)
    }
}
