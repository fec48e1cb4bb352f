//! Related products for the detail page.

use crate::catalog::Catalog;
use crate::domain::Product;

/// Other products that share `product`'s category or at least one tag
/// (exact match), in catalog order, capped at `limit`.
#[must_use]
pub fn related_products<'a>(catalog: &'a Catalog, product: &Product, limit: usize) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|candidate| candidate.id != product.id)
        .filter(|candidate| {
            candidate.category_id == product.category_id
                || candidate.tags.iter().any(|tag| product.tags.contains(tag))
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogData, CategoryRecord, ProductRecord};

    fn record(id: &str, category: &str, tags: &[&str]) -> ProductRecord {
        let mut record = ProductRecord::new(id, id, category, 1_000);
        record.tags = tags.iter().map(|t| (*t).to_string()).collect();
        record
    }

    fn catalog() -> Catalog {
        let categories = ["wig", "boots"]
            .iter()
            .map(|id| CategoryRecord {
                id: (*id).to_string(),
                name: (*id).to_string(),
                icon: String::new(),
            })
            .collect();
        Catalog::from_data(CatalogData {
            version: 1,
            categories,
            anime_filters: vec![],
            products: vec![
                record("1", "wig", &["원신"]),
                record("2", "boots", &["원신"]),
                record("3", "boots", &["원신 굿즈"]),
                record("4", "wig", &[]),
                record("5", "boots", &["미쿠"]),
            ],
        })
        .unwrap()
    }

    #[test]
    fn shares_category_or_exact_tag() {
        let catalog = catalog();
        let product = catalog.product("1").unwrap();
        let ids: Vec<&str> = related_products(&catalog, product, 4)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["2", "4"]);
    }

    #[test]
    fn respects_limit() {
        let catalog = catalog();
        let product = catalog.product("2").unwrap();
        assert_eq!(related_products(&catalog, product, 2).len(), 2);
        assert!(related_products(&catalog, product, 0).is_empty());
    }
}
