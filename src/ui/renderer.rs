//! Top-level rendering coordinator.
//!
//! Rendering is two steps:
//!
//! 1. **View Model Computation**: `AppState` becomes a `UIViewModel`
//! 2. **Component Rendering**: the page body picks its layout and the
//!    components append ANSI-styled text to one buffer
//!
//! The caller decides where the frame goes; nothing here writes to stdout.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageBody, UIViewModel};

/// Renders the current page of `state` at `cols` terminal columns.
///
/// # Example
///
/// ```
/// use hellowshop::{initialize, Config};
///
/// let state = initialize(&Config::default()).unwrap();
/// let frame = hellowshop::ui::render(&state, 80);
/// assert!(frame.contains("HELLOW SHOP"));
/// ```
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::with_capacity(4096);

    components::render_header(&mut out, &vm.header, theme, cols);
    components::render_border(&mut out, &theme.colors.border, cols);

    match &vm.body {
        PageBody::Home(home) => components::render_home(&mut out, home, theme, cols),
        PageBody::Listing(listing) => components::render_listing(&mut out, listing, theme, cols),
        PageBody::Detail(detail) => components::render_detail(&mut out, detail, theme, cols),
        PageBody::Search(search) => components::render_search(&mut out, search, theme, cols),
        PageBody::Cart(cart) => components::render_cart(&mut out, cart, theme, cols),
        PageBody::NotFound(empty) => components::render_empty_state(&mut out, empty, theme, cols),
    }

    components::render_border(&mut out, &theme.colors.border, cols);
    components::render_footer(&mut out, &vm.footer, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::catalog::Catalog;
    use crate::Config;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), Theme::default(), &Config::default())
    }

    #[test]
    fn home_frame_has_sections() {
        let frame = render(&state(), 100);
        assert!(frame.contains("HELLOW SHOP"));
        assert!(frame.contains("베스트 상품"));
        assert!(frame.contains("신상품"));
        assert!(frame.contains("전체 상품"));
        assert!(frame.contains("[전체 15]"));
    }

    #[test]
    fn listing_frame_shows_sort_label() {
        let mut state = state();
        handle_event(&mut state, &Event::Navigate("/products?category=wig".into())).unwrap();
        let frame = render(&state, 100);
        assert!(frame.contains("위그 (3개 · 최신순)"));
    }

    #[test]
    fn not_found_frame() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenProduct("999".into())).unwrap();
        let frame = render(&state, 80);
        assert!(frame.contains("상품을 찾을 수 없습니다"));
    }
}
