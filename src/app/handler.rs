//! Event handling and state transitions.
//!
//! [`handle_event`] is the single place where user input turns into state
//! changes. Each event is resolved completely (transition, then the caller
//! recomputes the view) before the next one is handled.
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`, `OpenProduct`, `Quit`
//! - **Facets**: `ToggleCategory`, `SelectCategory`, `ToggleAnime`, `SetSort`,
//!   `ClearFilters`, `ClearCategory`, `SubmitSearch`
//! - **Cart**: `SetQuantity`, `AddToCart`, `AddDetailToCart`,
//!   `UpdateCartQuantity`, `RemoveFromCart`, `ClearCart`, `Checkout`
//! - **Banner**: `BannerTick`, `SelectBanner`
//!
//! # Example
//!
//! ```
//! use hellowshop::app::{handle_event, AppState, Event};
//! use hellowshop::catalog::Catalog;
//! use hellowshop::{Config, Theme};
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default(), &Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::Navigate("/cart".into()))?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), hellowshop::StorefrontError>(())
//! ```

use crate::app::{Action, AppState, Page, Route};
use crate::domain::error::{Result, StorefrontError};
use crate::engine::{CategorySelection, SortOrder};
use crate::ui::helpers::format_price;

/// Notice shown for the simulated checkout.
pub const CHECKOUT_NOTICE: &str = "데모 페이지입니다. 실제 결제는 진행되지 않습니다.";

/// Events triggered by the user or the banner timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Goes to a path-and-query location such as `/products?category=wig`.
    Navigate(String),
    /// Opens the detail page of a product.
    OpenProduct(String),

    /// Home page quick category button: selects, or deselects if active.
    ToggleCategory(String),
    /// Listing page category tab: replaces the category (`"all"` for all).
    SelectCategory(String),
    /// Adds or removes an anime filter on the current page.
    ToggleAnime(String),
    SetSort(SortOrder),
    /// Resets category and anime filters on the current page.
    ClearFilters,
    /// Removes only the category chip.
    ClearCategory,
    /// Starts a search and shows the search page.
    SubmitSearch(String),

    /// Sets the detail page quantity selector.
    SetQuantity(i64),
    AddToCart { product_id: String, quantity: u32 },
    /// Adds the detail page product with its selected quantity.
    AddDetailToCart,
    /// Sets a cart line quantity; zero or less removes the line.
    UpdateCartQuantity { product_id: String, quantity: i64 },
    RemoveFromCart(String),
    ClearCart,
    Checkout,

    /// Advances the hero banner.
    BannerTick,
    SelectBanner(usize),

    Quit,
}

/// Processes one event and returns whether to re-render plus the actions to
/// carry out.
///
/// A product id that does not exist never fails the handler: opening it
/// shows the not-found page, adding it to the cart yields a notice.
///
/// # Errors
///
/// Reserved for failures other than a missing product; none of the current
/// events produce one.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, page = state.page.name()).entered();

    match event {
        Event::Navigate(location) => {
            let route = Route::parse(location);
            let result = state.navigate(&route);
            with_not_found(state, result, &route)
        }
        Event::OpenProduct(id) => {
            let route = Route::ProductDetail { id: id.clone() };
            state.route = route.clone();
            let result = state.open_product(id);
            with_not_found(state, result, &route)
        }
        Event::ToggleCategory(id) => {
            state.active_facets_mut().toggle_category(id);
            Ok((true, vec![]))
        }
        Event::SelectCategory(id) => {
            let category = CategorySelection::from_param(id);
            state.active_facets_mut().set_category(category.clone());

            if state.page == Page::Listing {
                state.route = Route::Products { category };
                return Ok((true, vec![Action::PushUrl(state.route.to_path())]));
            }
            Ok((true, vec![]))
        }
        Event::ToggleAnime(id) => {
            state.active_facets_mut().toggle_anime(id);
            Ok((true, vec![]))
        }
        Event::SetSort(order) => {
            if state.active_facets().sort_order == *order {
                return Ok((false, vec![]));
            }
            state.active_facets_mut().set_sort(*order);
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            if !state.active_facets().has_active_filters() {
                return Ok((false, vec![]));
            }
            state.active_facets_mut().clear_all();
            Ok((true, vec![]))
        }
        Event::ClearCategory => {
            if state.active_facets().active_category.is_all() {
                return Ok((false, vec![]));
            }
            state.active_facets_mut().set_category(CategorySelection::All);
            Ok((true, vec![]))
        }
        Event::SubmitSearch(query) => {
            let route = Route::Search {
                query: query.trim().to_string(),
            };
            state.navigate(&route)?;
            tracing::debug!(query = %state.facets.search_query, "search submitted");
            Ok((true, vec![Action::PushUrl(route.to_path())]))
        }
        Event::SetQuantity(quantity) => Ok((state.set_detail_quantity(*quantity), vec![])),
        Event::AddToCart { product_id, quantity } => add_to_cart(state, product_id, *quantity),
        Event::AddDetailToCart => {
            let Page::Detail { product_id, quantity } = state.page.clone() else {
                return Ok((false, vec![]));
            };
            add_to_cart(state, &product_id, quantity)
        }
        Event::UpdateCartQuantity { product_id, quantity } => {
            Ok((state.cart.update_quantity(product_id, *quantity), vec![]))
        }
        Event::RemoveFromCart(product_id) => Ok((state.cart.remove(product_id), vec![])),
        Event::ClearCart => {
            if state.cart.is_empty() {
                return Ok((false, vec![]));
            }
            state.cart.clear();
            Ok((true, vec![]))
        }
        Event::Checkout => {
            if state.cart.is_empty() {
                return Ok((false, vec![Action::Notify("장바구니가 비어 있습니다.".to_string())]));
            }

            let order_ref = chrono::Local::now().format("HS%Y%m%d-%H%M%S");
            tracing::info!(
                order_ref = %order_ref,
                items = state.cart.item_count(),
                total = state.cart.final_total(),
                "simulated checkout"
            );
            Ok((
                false,
                vec![Action::Notify(format!(
                    "{CHECKOUT_NOTICE} (주문번호 {order_ref}, 결제 예정 금액 {})",
                    format_price(state.cart.final_total())
                ))],
            ))
        }
        Event::BannerTick => {
            state.banners.tick();
            let visible = state.page == Page::Home && !state.banners.banners().is_empty();
            Ok((visible, vec![]))
        }
        Event::SelectBanner(index) => Ok((state.banners.select(*index), vec![])),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Turns a missing product into the not-found page; other errors propagate.
fn with_not_found(state: &mut AppState, result: Result<()>, route: &Route) -> Result<(bool, Vec<Action>)> {
    match result {
        Ok(()) => Ok((true, vec![Action::PushUrl(route.to_path())])),
        Err(StorefrontError::ProductNotFound(id)) => {
            state.show_not_found(&id);
            Ok((true, vec![Action::PushUrl(route.to_path())]))
        }
        Err(e) => Err(e),
    }
}

fn add_to_cart(state: &mut AppState, product_id: &str, quantity: u32) -> Result<(bool, Vec<Action>)> {
    match state.add_to_cart(product_id, quantity) {
        Ok(product) => {
            let notice = format!("장바구니에 담았습니다: {} × {quantity}", product.name);
            Ok((true, vec![Action::Notify(notice)]))
        }
        Err(StorefrontError::ProductNotFound(id)) => Ok((
            false,
            vec![Action::Notify(format!("상품을 찾을 수 없습니다: {id}"))],
        )),
        Err(e) => Err(e),
    }
}
