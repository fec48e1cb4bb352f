//! Product domain model and price arithmetic.
//!
//! A [`Product`] is an immutable catalog entry. Prices are whole currency
//! units; the effective price is the sale price when one is set, otherwise the
//! original price.

use serde::{Deserialize, Serialize};

/// A product offered by the storefront.
///
/// Instances are created by the catalog loader after validation, so
/// `sale_price < original_price` always holds when a sale price is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub original_price: u64,
    pub sale_price: Option<u64>,
    pub tags: Vec<String>,
    pub is_new: bool,
    pub is_best: bool,
    pub image_url: String,
}

impl Product {
    /// Returns the price a customer pays for one unit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hellowshop::domain::Product;
    /// let product = Product {
    ///     id: "1".into(),
    ///     name: "Wig".into(),
    ///     category_id: "wig".into(),
    ///     original_price: 45_000,
    ///     sale_price: Some(39_000),
    ///     tags: vec![],
    ///     is_new: false,
    ///     is_best: false,
    ///     image_url: String::new(),
    /// };
    /// assert_eq!(product.effective_price(), 39_000);
    /// ```
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        self.sale_price.unwrap_or(self.original_price)
    }

    /// Returns the discount as a whole percentage, rounded half up.
    ///
    /// Products without a sale price have a discount of 0. The computation is
    /// done in integers: `round(x / y)` for positive values equals
    /// `(2x + y) / 2y` with flooring division. Intermediates are `u128`, so
    /// any `u64` price is safe.
    #[must_use]
    pub fn discount_percent(&self) -> u64 {
        match self.sale_price {
            Some(sale) if self.original_price > 0 && sale < self.original_price => {
                let original = u128::from(self.original_price);
                let saved = original - u128::from(sale);
                let percent = (saved * 200 + original) / (original * 2);
                u64::try_from(percent).unwrap_or(100)
            }
            _ => 0,
        }
    }

    /// Returns `true` when the product is currently discounted.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent() > 0
    }

    /// Returns `true` if any tag contains `needle` as a case-sensitive substring.
    #[must_use]
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags.iter().any(|tag| tag.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(original: u64, sale: Option<u64>) -> Product {
        Product {
            id: "p".to_string(),
            name: "p".to_string(),
            category_id: "costume".to_string(),
            original_price: original,
            sale_price: sale,
            tags: vec!["원신".to_string(), "라이덴".to_string()],
            is_new: false,
            is_best: false,
            image_url: String::new(),
        }
    }

    #[test]
    fn discount_of_twenty_percent() {
        assert_eq!(priced(10_000, Some(8_000)).discount_percent(), 20);
    }

    #[test]
    fn no_sale_price_means_no_discount() {
        let product = priced(10_000, None);
        assert_eq!(product.discount_percent(), 0);
        assert!(!product.is_on_sale());
        assert_eq!(product.effective_price(), 10_000);
    }

    #[test]
    fn discount_rounds_half_up() {
        // 15.87 -> 16
        assert_eq!(priced(189_000, Some(159_000)).discount_percent(), 16);
        // 13.33 -> 13
        assert_eq!(priced(45_000, Some(39_000)).discount_percent(), 13);
        // exactly 12.5 -> 13
        assert_eq!(priced(8, Some(7)).discount_percent(), 13);
    }

    #[test]
    fn discount_on_extreme_prices_does_not_overflow() {
        assert_eq!(priced(100_000_000_000_000_000, Some(1)).discount_percent(), 100);
        assert_eq!(priced(u64::MAX, Some(u64::MAX / 2)).discount_percent(), 50);
        assert_eq!(priced(u64::MAX, Some(u64::MAX - 1)).discount_percent(), 0);
    }

    #[test]
    fn tag_matching_is_substring_and_case_sensitive() {
        let mut product = priced(1, None);
        product.tags = vec!["Genshin Impact".to_string()];
        assert!(product.has_tag_containing("Genshin"));
        assert!(!product.has_tag_containing("genshin"));
        assert!(product.has_tag_containing("Impact"));
    }
}
