//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! data only: labels are formatted, counts are final and highlight ranges are
//! precomputed.

/// Complete view model for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: PageBody,
    pub footer: FooterInfo,
}

/// The page-specific part of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Home(HomeView),
    Listing(ListingView),
    Detail(DetailView),
    Search(SearchView),
    Cart(CartView),
    /// Unknown product, with a way back to the catalog.
    NotFound(EmptyState),
}

/// Top bar: shop name, current location and cart badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub location: String,
    pub cart_count: u64,
}

/// Command hints for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    /// Zero-based position of this banner.
    pub position: usize,
    pub total: usize,
}

/// One category tab or quick category button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// One anime filter card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeInfo {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// One product in a grid or list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Effective price, formatted.
    pub price: String,
    /// Original price, formatted, when on sale.
    pub original_price: Option<String>,
    /// Rounded discount, 0 when not on sale.
    pub discount_percent: u64,
    pub is_new: bool,
    pub is_best: bool,
    /// Byte ranges of `name` matching the search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Filter controls shared by the home grid and the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    pub tabs: Vec<TabInfo>,
    pub anime: Vec<AnimeInfo>,
    /// Active filter chip labels, category first.
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub banner: Option<BannerInfo>,
    pub filters: FilterBar,
    pub best_sellers: Vec<ProductCard>,
    pub new_arrivals: Vec<ProductCard>,
    pub products: Vec<ProductCard>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    /// Active category label, "전체" when unrestricted.
    pub title: String,
    pub filters: FilterBar,
    pub sort_label: String,
    pub result_count: usize,
    pub products: Vec<ProductCard>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub product: ProductCard,
    pub tags: Vec<String>,
    pub quantity: u32,
    /// Effective price times quantity, formatted.
    pub line_total: String,
    pub related: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub search_bar: SearchBarInfo,
    pub result_count: usize,
    pub products: Vec<ProductCard>,
    /// Prompt for an empty query, or "no results" with suggestions.
    pub empty_state: Option<EmptyState>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineInfo {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineInfo>,
    pub subtotal: String,
    pub discount: Option<String>,
    /// Formatted fee, or "무료".
    pub shipping: String,
    pub total: String,
    /// "N원 추가 주문 시 무료배송" while below the threshold.
    pub free_shipping_hint: Option<String>,
    pub empty_state: Option<EmptyState>,
}
