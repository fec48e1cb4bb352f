//! Home page product sections.

use crate::catalog::Catalog;
use crate::domain::Product;

/// The first `limit` best sellers, in catalog order.
#[must_use]
pub fn best_sellers(catalog: &Catalog, limit: usize) -> Vec<&Product> {
    catalog.products().iter().filter(|p| p.is_best).take(limit).collect()
}

/// The first `limit` new arrivals, in catalog order.
#[must_use]
pub fn new_arrivals(catalog: &Catalog, limit: usize) -> Vec<&Product> {
    catalog.products().iter().filter(|p| p.is_new).take(limit).collect()
}
