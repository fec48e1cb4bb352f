//! Composable UI component renderers.
//!
//! Each component appends one part of the screen to a `String` buffer. The
//! page layouts in this module stack them between the shared header and
//! footer.
//!
//! # Components
//!
//! - [`header`]: Shop title, location and cart badge
//! - [`footer`]: Command hints
//! - [`banner`]: Rotating hero banner
//! - [`filters`]: Category tabs, anime cards and active chips
//! - [`search`]: Search input box and suggested terms
//! - [`table`]: Product rows with badges, prices and match highlighting
//! - [`detail`]: Single product with quantity stepper and related products
//! - [`cart`]: Cart lines and order summary
//! - [`empty`]: Empty state message
//!
//! # Layouts
//!
//! Every page is `[Header] [Border] [Body] [Border] [Footer]`; only the body
//! differs:
//!
//! - [`render_home`]: Banner + Filters + Best + New + All products
//! - [`render_listing`]: Title + Filters + Sorted products
//! - [`render_search`]: Search bar + Results or Suggestions
//! - [`render_detail`]: Product detail
//! - [`render_cart`]: Cart

mod banner;
mod cart;
mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod search;
mod table;

pub use cart::render_cart;
pub use detail::render_detail;
pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HomeView, ListingView, SearchView};

use banner::render_banner;
use filters::render_filter_bar;
use search::{render_search_bar, render_suggestions};
use table::{render_product_rows, render_section_title};

/// Appends a full-width horizontal rule.
pub fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Home page body.
///
/// The best seller and new arrival sections ignore the home filters; only
/// the "전체 상품" grid follows them.
pub fn render_home(out: &mut String, home: &HomeView, theme: &Theme, cols: usize) {
    if let Some(banner) = &home.banner {
        render_banner(out, banner, theme, cols);
    }

    if !home.best_sellers.is_empty() {
        render_section_title(out, "베스트 상품", theme, cols);
        render_product_rows(out, &home.best_sellers, theme, cols);
        out.push('\n');
    }
    if !home.new_arrivals.is_empty() {
        render_section_title(out, "신상품", theme, cols);
        render_product_rows(out, &home.new_arrivals, theme, cols);
        out.push('\n');
    }

    render_section_title(out, "전체 상품", theme, cols);
    render_filter_bar(out, &home.filters, theme, cols);
    match &home.empty_state {
        Some(empty) => render_empty_state(out, empty, theme, cols),
        None => render_product_rows(out, &home.products, theme, cols),
    }
}

/// Listing page body.
pub fn render_listing(out: &mut String, listing: &ListingView, theme: &Theme, cols: usize) {
    render_section_title(
        out,
        &format!("{} ({}개 · {})", listing.title, listing.result_count, listing.sort_label),
        theme,
        cols,
    );
    render_filter_bar(out, &listing.filters, theme, cols);
    render_border(out, &theme.colors.border, cols);

    match &listing.empty_state {
        Some(empty) => render_empty_state(out, empty, theme, cols),
        None => render_product_rows(out, &listing.products, theme, cols),
    }
}

/// Search page body.
pub fn render_search(out: &mut String, search: &SearchView, theme: &Theme, cols: usize) {
    render_search_bar(out, &search.search_bar, theme, cols);

    if let Some(empty) = &search.empty_state {
        render_empty_state(out, empty, theme, cols);
        render_suggestions(out, &search.suggestions, theme, cols);
        return;
    }

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!(" \"{}\" 검색 결과 {}개", search.search_bar.query, search.result_count));
    out.push_str(Theme::reset());
    out.push('\n');
    render_product_rows(out, &search.products, theme, cols);
}
