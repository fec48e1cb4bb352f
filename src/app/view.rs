//! View model computation.
//!
//! Turns an [`AppState`] snapshot into a [`UIViewModel`]. All queries go
//! through the engine entry points so every page filters and orders the same
//! way; this module only formats.

use super::modes::Page;
use super::state::AppState;
use crate::domain::Product;
use crate::engine::filter::{match_ranges, tokenize};
use crate::engine::projection::{self, ALL_CATEGORIES_LABEL};
use crate::engine::{self, FacetState};
use crate::ui::helpers::format_price;
use crate::ui::viewmodel::{
    AnimeInfo, BannerInfo, CartLineInfo, CartView, DetailView, EmptyState, FilterBar, FooterInfo,
    HeaderInfo, HomeView, ListingView, PageBody, ProductCard, SearchBarInfo, SearchView, TabInfo,
    UIViewModel,
};

/// Shop name in the header.
pub const SHOP_TITLE: &str = "HELLOW SHOP";

impl AppState {
    /// Computes the view model for the current page.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", page = self.page.name()).entered();

        let body = match &self.page {
            Page::Home => PageBody::Home(self.home_view()),
            Page::Listing => PageBody::Listing(self.listing_view()),
            Page::Detail { product_id, quantity } => match self.catalog.product(product_id) {
                Some(product) => PageBody::Detail(self.detail_view(product, *quantity)),
                None => PageBody::NotFound(not_found_state()),
            },
            Page::NotFound { .. } => PageBody::NotFound(not_found_state()),
            Page::Search => PageBody::Search(self.search_view()),
            Page::Cart => PageBody::Cart(self.cart_view()),
        };

        UIViewModel {
            header: HeaderInfo {
                title: SHOP_TITLE.to_string(),
                location: self.route.to_path(),
                cart_count: self.cart.item_count(),
            },
            body,
            footer: self.compute_footer(),
        }
    }

    fn home_view(&self) -> HomeView {
        let results = self.home_results();
        let limit = self.settings.home_section_size;

        HomeView {
            banner: self.banners.current().map(|b| BannerInfo {
                title: b.title.clone(),
                subtitle: b.subtitle.clone(),
                cta: b.cta.clone(),
                position: self.banners.current_index(),
                total: self.banners.banners().len(),
            }),
            filters: self.filter_bar(&self.home_facets, &results),
            best_sellers: self.cards(&engine::best_sellers(&self.catalog, limit), &[]),
            new_arrivals: self.cards(&engine::new_arrivals(&self.catalog, limit), &[]),
            empty_state: results.is_empty().then(no_products_state),
            products: self.cards(&results, &[]),
        }
    }

    fn listing_view(&self) -> ListingView {
        let results = self.listing_results();

        ListingView {
            title: projection::category_label(&self.catalog, &self.facets.active_category),
            filters: self.filter_bar(&self.facets, &results),
            sort_label: self.facets.sort_order.label().to_string(),
            result_count: results.len(),
            empty_state: results.is_empty().then(no_products_state),
            products: self.cards(&results, &[]),
        }
    }

    fn detail_view(&self, product: &Product, quantity: u32) -> DetailView {
        let related = engine::related_products(&self.catalog, product, self.settings.related_limit);

        DetailView {
            product: self.card(product, &[]),
            tags: product.tags.clone(),
            quantity,
            line_total: format_price(
                product
                    .effective_price()
                    .saturating_mul(u64::from(quantity)),
            ),
            related: self.cards(&related, &[]),
        }
    }

    fn search_view(&self) -> SearchView {
        let query = &self.facets.search_query;
        let terms = tokenize(query);
        let results = self.search_results();

        let (empty_state, suggestions) = if terms.is_empty() {
            (
                Some(EmptyState {
                    message: "검색어를 입력해주세요".to_string(),
                    subtitle: "상품명, 카테고리, 작품명으로 검색할 수 있습니다".to_string(),
                }),
                Vec::new(),
            )
        } else if results.is_empty() {
            (
                Some(EmptyState {
                    message: "검색 결과가 없습니다".to_string(),
                    subtitle: format!("\"{query}\" 대신 추천 검색어를 이용해 보세요"),
                }),
                self.settings.suggested_terms.clone(),
            )
        } else {
            (None, Vec::new())
        };

        SearchView {
            search_bar: SearchBarInfo { query: query.clone() },
            result_count: results.len(),
            products: self.cards(&results, &terms),
            empty_state,
            suggestions,
        }
    }

    fn cart_view(&self) -> CartView {
        let cart = &self.cart;
        let discount = cart.total_discount();

        CartView {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineInfo {
                    id: line.product.id.clone(),
                    name: line.product.name.clone(),
                    quantity: line.quantity,
                    unit_price: format_price(line.product.effective_price()),
                    line_total: format_price(line.line_total()),
                })
                .collect(),
            subtotal: format_price(cart.total_price()),
            discount: (discount > 0).then(|| format!("-{}", format_price(discount))),
            shipping: match cart.shipping_fee() {
                0 => "무료".to_string(),
                fee => format_price(fee),
            },
            total: format_price(cart.final_total()),
            free_shipping_hint: cart
                .free_shipping_remaining()
                .map(|remaining| format!("{} 추가 주문 시 무료배송", format_price(remaining))),
            empty_state: cart.is_empty().then(|| EmptyState {
                message: "장바구니가 비어있습니다".to_string(),
                subtitle: "마음에 드는 상품을 담아보세요".to_string(),
            }),
        }
    }

    /// Category tabs, anime cards and chips for `facets`, whose engine
    /// output is `results`.
    fn filter_bar(&self, facets: &FacetState, results: &[&Product]) -> FilterBar {
        let counts = projection::project(&self.catalog, facets, results);

        let mut tabs = Vec::with_capacity(counts.per_category_count.len() + 1);
        tabs.push(TabInfo {
            id: "all".to_string(),
            label: ALL_CATEGORIES_LABEL.to_string(),
            count: counts.catalog_count,
            active: facets.active_category.is_all(),
        });
        tabs.extend(counts.per_category_count.into_iter().map(|c| TabInfo {
            id: c.id,
            label: c.name,
            count: c.count,
            active: c.active,
        }));

        FilterBar {
            tabs,
            anime: counts
                .per_anime_count
                .into_iter()
                .map(|a| AnimeInfo {
                    id: a.id,
                    label: a.name,
                    count: a.count,
                    selected: a.selected,
                })
                .collect(),
            chips: counts.chips.into_iter().map(|c| c.label).collect(),
        }
    }

    fn cards(&self, products: &[&Product], terms: &[String]) -> Vec<ProductCard> {
        products.iter().map(|p| self.card(p, terms)).collect()
    }

    fn card(&self, product: &Product, terms: &[String]) -> ProductCard {
        ProductCard {
            id: product.id.clone(),
            name: product.name.clone(),
            category: self
                .catalog
                .category_name(&product.category_id)
                .unwrap_or_default()
                .to_string(),
            price: format_price(product.effective_price()),
            original_price: product
                .is_on_sale()
                .then(|| format_price(product.original_price)),
            discount_percent: product.discount_percent(),
            is_new: product.is_new,
            is_best: product.is_best,
            highlight_ranges: match_ranges(&product.name, terms),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.page {
            Page::Home => "cat <id>  anime <id>  clear  open <id>  search <q>  tick  go <path>  q: quit",
            Page::Listing => "cat <id|all>  anime <id>  sort <order>  clear  open <id>  go <path>  q: quit",
            Page::Detail { .. } => "qty <n>  add  go /cart  go /products  q: quit",
            Page::NotFound { .. } => "go /products: 상품 목록으로  go /: 홈으로  q: quit",
            Page::Search => "search <q>  open <id>  go <path>  q: quit",
            Page::Cart => "qty <id> <n>  rm <id>  empty  checkout  go <path>  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

fn no_products_state() -> EmptyState {
    EmptyState {
        message: "해당 조건의 상품이 없습니다".to_string(),
        subtitle: "clear: 필터 초기화".to_string(),
    }
}

fn not_found_state() -> EmptyState {
    EmptyState {
        message: "상품을 찾을 수 없습니다".to_string(),
        subtitle: "go /products: 상품 목록으로 돌아가기".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::catalog::Catalog;
    use crate::ui::theme::Theme;
    use crate::Config;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), Theme::default(), &Config::default())
    }

    #[test]
    fn home_sections_are_capped() {
        let vm = state().compute_viewmodel();
        let PageBody::Home(home) = vm.body else {
            panic!("expected home page");
        };
        assert_eq!(home.best_sellers.len(), 4);
        assert!(home.new_arrivals.len() <= 4);
        assert_eq!(home.filters.tabs[0].label, "전체");
        assert!(home.banner.is_some());
    }

    #[test]
    fn empty_search_prompts() {
        let mut state = state();
        handle_event(&mut state, &Event::Navigate("/search".into())).unwrap();
        let PageBody::Search(search) = state.compute_viewmodel().body else {
            panic!("expected search page");
        };
        assert_eq!(search.empty_state.unwrap().message, "검색어를 입력해주세요");
        assert!(search.suggestions.is_empty());
    }

    #[test]
    fn fruitless_search_suggests_terms() {
        let mut state = state();
        handle_event(&mut state, &Event::SubmitSearch("존재하지않는상품".into())).unwrap();
        let PageBody::Search(search) = state.compute_viewmodel().body else {
            panic!("expected search page");
        };
        assert_eq!(search.result_count, 0);
        assert_eq!(search.suggestions, Config::default().suggested_terms);
    }

    #[test]
    fn cart_view_shows_free_shipping_hint() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::AddToCart {
                product_id: "13".into(),
                quantity: 1,
            },
        )
        .unwrap();
        handle_event(&mut state, &Event::Navigate("/cart".into())).unwrap();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.cart_count, 1);
        let PageBody::Cart(cart) = vm.body else {
            panic!("expected cart page");
        };
        assert_eq!(cart.shipping, "3,000원");
        assert_eq!(cart.total, "12,000원");
        assert_eq!(cart.free_shipping_hint.as_deref(), Some("41,000원 추가 주문 시 무료배송"));
    }

    #[test]
    fn not_found_page_offers_way_back() {
        let mut state = state();
        handle_event(&mut state, &Event::Navigate("/products/nope".into())).unwrap();
        let PageBody::NotFound(empty) = state.compute_viewmodel().body else {
            panic!("expected not-found page");
        };
        assert!(empty.subtitle.contains("/products"));
    }
}
