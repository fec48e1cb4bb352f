mod common;

use common::{ids, state};
use hellowshop::app::handler::CHECKOUT_NOTICE;
use hellowshop::ui::PageBody;
use hellowshop::{handle_event, Action, Event, Page, Route, SortOrder};

#[test]
fn listing_route_seeds_category() {
    let mut state = state();
    let (render, actions) =
        handle_event(&mut state, &Event::Navigate("/products?category=figure".into())).unwrap();

    assert!(render);
    assert_eq!(actions, vec![Action::PushUrl("/products?category=figure".into())]);
    assert_eq!(state.page, Page::Listing);
    assert_eq!(ids(&state.listing_results()), vec!["10", "11"]);
}

#[test]
fn listing_tab_pushes_url_and_keeps_anime() {
    let mut state = state();
    handle_event(&mut state, &Event::Navigate("/products".into())).unwrap();
    handle_event(&mut state, &Event::ToggleAnime("genshin".into())).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::SelectCategory("boots".into())).unwrap();
    assert_eq!(actions, vec![Action::PushUrl("/products?category=boots".into())]);
    assert_eq!(ids(&state.listing_results()), vec!["9"]);
    assert!(state.facets.is_anime_selected("genshin"));
}

#[test]
fn home_filters_are_independent_of_listing() {
    let mut state = state();
    handle_event(&mut state, &Event::ToggleCategory("wig".into())).unwrap();
    assert_eq!(state.home_results().len(), 3);

    handle_event(&mut state, &Event::Navigate("/products".into())).unwrap();
    assert_eq!(state.listing_results().len(), 15);

    handle_event(&mut state, &Event::Navigate("/".into())).unwrap();
    assert_eq!(state.home_results().len(), 3);

    // Toggling the active quick category deselects it.
    handle_event(&mut state, &Event::ToggleCategory("wig".into())).unwrap();
    assert_eq!(state.home_results().len(), 15);
}

#[test]
fn sort_change_reorders_without_refiltering() {
    let mut state = state();
    handle_event(&mut state, &Event::Navigate("/products?category=costume".into())).unwrap();
    let before = state.listing_results().len();

    handle_event(&mut state, &Event::SetSort(SortOrder::PriceLow)).unwrap();
    let prices: Vec<u64> = state.listing_results().iter().map(|p| p.effective_price()).collect();
    assert_eq!(prices.len(), before);
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    let (render, _) = handle_event(&mut state, &Event::SetSort(SortOrder::PriceLow)).unwrap();
    assert!(!render);
}

#[test]
fn search_starts_fresh_context() {
    let mut state = state();
    handle_event(&mut state, &Event::Navigate("/products?category=wig".into())).unwrap();
    handle_event(&mut state, &Event::ToggleAnime("vocaloid".into())).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch(" 원신 코스튬 ".into())).unwrap();
    assert_eq!(state.page, Page::Search);
    assert!(state.facets.active_category.is_all());
    assert!(state.facets.selected_anime.is_empty());
    assert_eq!(ids(&state.search_results()), vec!["1", "9"]);
    assert_eq!(
        actions,
        vec![Action::PushUrl(Route::Search { query: "원신 코스튬".into() }.to_path())]
    );
}

#[test]
fn encoded_search_url_decodes() {
    let mut state = state();
    handle_event(
        &mut state,
        &Event::Navigate("/search?q=%EB%AF%B8%EC%BF%A0".into()),
    )
    .unwrap();
    assert_eq!(state.facets.search_query, "미쿠");
    assert_eq!(ids(&state.search_results()), vec!["4", "13"]);
}

#[test]
fn search_highlights_matches_in_names() {
    let mut state = state();
    handle_event(&mut state, &Event::SubmitSearch("라이덴".into())).unwrap();

    let PageBody::Search(search) = state.compute_viewmodel().body else {
        panic!("expected search page");
    };
    let card = &search.products[0];
    let (start, end) = card.highlight_ranges[0];
    assert_eq!(&card.name[start..end], "라이덴");
}

#[test]
fn unknown_product_shows_not_found() {
    let mut state = state();
    let (render, _) = handle_event(&mut state, &Event::Navigate("/products/999".into())).unwrap();

    assert!(render);
    assert_eq!(
        state.page,
        Page::NotFound {
            requested_id: "999".into()
        }
    );

    handle_event(&mut state, &Event::Navigate("/products".into())).unwrap();
    assert_eq!(state.page, Page::Listing);
}

#[test]
fn detail_quantity_flows_into_cart() {
    let mut state = state();
    handle_event(&mut state, &Event::OpenProduct("8".into())).unwrap();
    handle_event(&mut state, &Event::SetQuantity(0)).unwrap();
    assert_eq!(
        state.page,
        Page::Detail {
            product_id: "8".into(),
            quantity: 1
        }
    );

    handle_event(&mut state, &Event::SetQuantity(2)).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::AddDetailToCart).unwrap();
    assert!(matches!(&actions[..], [Action::Notify(msg)] if msg.contains("카프카")));

    assert_eq!(state.cart.item_count(), 2);
    assert_eq!(state.cart.total_price(), 156_800);
    assert_eq!(state.cart.shipping_fee(), 0);
}

#[test]
fn detail_view_lists_related_products() {
    let mut state = state();
    handle_event(&mut state, &Event::OpenProduct("4".into())).unwrap();

    let PageBody::Detail(detail) = state.compute_viewmodel().body else {
        panic!("expected detail page");
    };
    let related: Vec<&str> = detail.related.iter().map(|c| c.id.as_str()).collect();
    assert!(related.contains(&"13"));
    assert!(related.contains(&"3"));
    assert!(!related.contains(&"4"));
}

#[test]
fn adding_unknown_product_is_a_notice() {
    let mut state = state();
    let (render, actions) = handle_event(
        &mut state,
        &Event::AddToCart {
            product_id: "nope".into(),
            quantity: 1,
        },
    )
    .unwrap();
    assert!(!render);
    assert_eq!(actions.len(), 1);
    assert!(state.cart.is_empty());
}

#[test]
fn checkout_is_simulated() {
    let mut state = state();
    handle_event(
        &mut state,
        &Event::AddToCart {
            product_id: "6".into(),
            quantity: 1,
        },
    )
    .unwrap();

    let (_, actions) = handle_event(&mut state, &Event::Checkout).unwrap();
    assert!(matches!(&actions[..], [Action::Notify(msg)] if msg.starts_with(CHECKOUT_NOTICE)));
    assert_eq!(state.cart.item_count(), 1);
}

#[test]
fn banner_ticks_wrap() {
    let mut state = state();
    let total = state.banners.banners().len();
    for _ in 0..total {
        handle_event(&mut state, &Event::BannerTick).unwrap();
    }
    assert_eq!(state.banners.current_index(), 0);

    let (render, _) = handle_event(&mut state, &Event::SelectBanner(total)).unwrap();
    assert!(!render);
}

#[test]
fn quit_requests_exit() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
    assert_eq!(actions, vec![Action::Quit]);
}
