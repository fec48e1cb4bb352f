//! Stable result ordering.

use crate::domain::Product;
use crate::engine::facets::SortOrder;
use std::cmp::Reverse;

/// Sorts `products` in place by `order`.
///
/// The sort is stable: products with equal keys keep their relative input
/// order, which for engine results is catalog order.
pub fn sort_products(order: SortOrder, products: &mut [&Product]) {
    let _span = tracing::trace_span!("sort_products", order = %order, len = products.len()).entered();

    match order {
        SortOrder::Latest => products.sort_by_key(|p| !p.is_new),
        SortOrder::PriceLow => products.sort_by_key(|p| p.effective_price()),
        SortOrder::PriceHigh => products.sort_by_key(|p| Reverse(p.effective_price())),
        SortOrder::Discount => products.sort_by_key(|p| Reverse(p.discount_percent())),
    }
}

/// Returns `products` sorted by `order`.
#[must_use]
pub fn sorted(order: SortOrder, mut products: Vec<&Product>) -> Vec<&Product> {
    sort_products(order, &mut products);
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64, sale: Option<u64>, is_new: bool) -> Product {
        Product {
            id: id.into(),
            name: id.into(),
            category_id: "c".into(),
            original_price: price,
            sale_price: sale,
            tags: vec![],
            is_new,
            is_best: false,
            image_url: String::new(),
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn latest_puts_new_first_and_keeps_order() {
        let items = [
            product("a", 1, None, false),
            product("b", 1, None, true),
            product("c", 1, None, false),
            product("d", 1, None, true),
        ];
        let result = sorted(SortOrder::Latest, items.iter().collect());
        assert_eq!(ids(&result), ["b", "d", "a", "c"]);
    }

    #[test]
    fn price_orders_use_effective_price() {
        let items = [
            product("a", 30_000, Some(10_000), false),
            product("b", 20_000, None, false),
            product("c", 15_000, None, false),
        ];
        let low = sorted(SortOrder::PriceLow, items.iter().collect());
        assert_eq!(ids(&low), ["a", "c", "b"]);
        let high = sorted(SortOrder::PriceHigh, items.iter().collect());
        assert_eq!(ids(&high), ["b", "c", "a"]);
    }

    #[test]
    fn equal_prices_keep_input_order_in_both_directions() {
        let items = [
            product("a", 10_000, None, false),
            product("b", 10_000, None, false),
            product("c", 5_000, None, false),
        ];
        assert_eq!(ids(&sorted(SortOrder::PriceLow, items.iter().collect())), ["c", "a", "b"]);
        assert_eq!(ids(&sorted(SortOrder::PriceHigh, items.iter().collect())), ["a", "b", "c"]);
    }

    #[test]
    fn discount_descending_with_unsold_last() {
        let items = [
            product("none", 10_000, None, false),
            product("ten", 10_000, Some(9_000), false),
            product("twenty", 10_000, Some(8_000), false),
            product("none2", 5_000, None, false),
        ];
        let result = sorted(SortOrder::Discount, items.iter().collect());
        assert_eq!(ids(&result), ["twenty", "ten", "none", "none2"]);
    }

    #[test]
    fn empty_input_for_every_order() {
        for order in SortOrder::ALL {
            assert!(sorted(order, Vec::new()).is_empty());
        }
    }
}
