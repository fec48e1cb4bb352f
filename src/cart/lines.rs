//! Cart contents and totals.
//!
//! The cart lives for one session only. Each line holds a snapshot of the
//! product taken when it was first added, so totals never need the catalog.

use crate::cart::shipping::ShippingPolicy;
use crate::domain::Product;
use serde::Serialize;

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product: Product,

    /// Always at least 1; a line reaching 0 is removed.
    pub quantity: u32,

    /// Unix timestamp of the first insertion.
    pub added_at: i64,
}

impl CartLine {
    /// Effective price times quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.product
            .effective_price()
            .saturating_mul(u64::from(self.quantity))
    }

    /// Savings against the original price for the whole line.
    #[must_use]
    pub fn line_discount(&self) -> u64 {
        self.product
            .original_price
            .saturating_sub(self.product.effective_price())
            .saturating_mul(u64::from(self.quantity))
    }
}

/// Session cart, ordered by first insertion.
///
/// # Example
///
/// ```
/// use hellowshop::cart::Cart;
/// use hellowshop::catalog::Catalog;
///
/// let catalog = Catalog::builtin()?;
/// let mut cart = Cart::default();
/// cart.add(catalog.require_product("4")?, 1);
/// assert_eq!(cart.total_price(), 52_000);
/// assert_eq!(cart.shipping_fee(), 0);
/// # Ok::<(), hellowshop::StorefrontError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    policy: ShippingPolicy,
}

impl Cart {
    #[must_use]
    pub fn with_policy(policy: ShippingPolicy) -> Self {
        Self {
            lines: Vec::new(),
            policy,
        }
    }

    /// Adds `quantity` of `product`, merging into an existing line.
    /// A zero quantity is ignored.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(product = %product.id, quantity = line.quantity, "cart line merged");
            return;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
            added_at: chrono::Utc::now().timestamp(),
        });
        tracing::debug!(product = %product.id, quantity, "cart line added");
    }

    /// Sets the quantity of a line. Zero or negative removes it.
    ///
    /// Returns `false` if no line has that product id.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) else {
            return false;
        };
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        true
    }

    /// Removes a line. Returns `false` if it was not in the cart.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        before != self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities, as shown on the header badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(0, u64::saturating_add)
    }

    /// Total savings against original prices.
    #[must_use]
    pub fn total_discount(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::line_discount)
            .fold(0, u64::saturating_add)
    }

    #[must_use]
    pub fn shipping_fee(&self) -> u64 {
        self.policy.fee_for(self.total_price())
    }

    #[must_use]
    pub fn final_total(&self) -> u64 {
        self.total_price().saturating_add(self.shipping_fee())
    }

    /// Amount to add for free shipping; `None` when already free or empty.
    #[must_use]
    pub fn free_shipping_remaining(&self) -> Option<u64> {
        if self.is_empty() {
            return None;
        }
        self.policy.remaining_for_free(self.total_price())
    }

    #[must_use]
    pub const fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64, sale: Option<u64>) -> Product {
        Product {
            id: id.into(),
            name: id.into(),
            category_id: "c".into(),
            original_price: price,
            sale_price: sale,
            tags: vec![],
            is_new: false,
            is_best: false,
            image_url: String::new(),
        }
    }

    #[test]
    fn add_merges_lines_and_keeps_order() {
        let mut cart = Cart::default();
        cart.add(&product("a", 10_000, None), 1);
        cart.add(&product("b", 5_000, None), 2);
        cart.add(&product("a", 10_000, None), 2);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(cart.line("a").unwrap().quantity, 3);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn zero_quantity_add_is_ignored() {
        let mut cart = Cart::default();
        cart.add(&product("a", 10_000, None), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_to_zero_removes() {
        let mut cart = Cart::default();
        cart.add(&product("a", 10_000, None), 2);
        assert!(cart.update_quantity("a", 5));
        assert_eq!(cart.line("a").unwrap().quantity, 5);
        assert!(cart.update_quantity("a", 0));
        assert!(cart.is_empty());
        assert!(!cart.update_quantity("a", 1));
    }

    #[test]
    fn totals_use_effective_price() {
        let mut cart = Cart::default();
        cart.add(&product("a", 15_000, Some(12_000)), 2);
        cart.add(&product("b", 9_000, None), 1);

        assert_eq!(cart.total_price(), 33_000);
        assert_eq!(cart.total_discount(), 6_000);
        assert_eq!(cart.shipping_fee(), 3_000);
        assert_eq!(cart.final_total(), 36_000);
        assert_eq!(cart.free_shipping_remaining(), Some(17_000));
    }

    #[test]
    fn free_shipping_at_threshold() {
        let mut cart = Cart::default();
        cart.add(&product("a", 25_000, None), 2);
        assert_eq!(cart.shipping_fee(), 0);
        assert_eq!(cart.final_total(), 50_000);
        assert_eq!(cart.free_shipping_remaining(), None);
    }

    #[test]
    fn empty_cart_ships_free() {
        let cart = Cart::default();
        assert_eq!(cart.final_total(), 0);
        assert_eq!(cart.free_shipping_remaining(), None);
    }

    #[test]
    fn custom_policy() {
        let mut cart = Cart::with_policy(ShippingPolicy {
            free_threshold: 10_000,
            flat_fee: 2_500,
        });
        cart.add(&product("a", 9_000, None), 1);
        assert_eq!(cart.shipping_fee(), 2_500);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn huge_quantities_saturate_totals() {
        let mut cart = Cart::default();
        cart.add(&product("a", 1_000_000_000, Some(900_000_000)), 1);
        cart.add(&product("b", 5_000_000_000, None), 1);
        assert!(cart.update_quantity("a", i64::MAX));
        assert!(cart.update_quantity("b", i64::MAX));

        assert_eq!(cart.line("a").unwrap().quantity, u32::MAX);
        assert_eq!(cart.total_price(), u64::MAX);
        assert_eq!(cart.final_total(), u64::MAX);
        assert_eq!(cart.total_discount(), 100_000_000 * u64::from(u32::MAX));
        assert_eq!(cart.shipping_fee(), 0);
    }
}
