//! The validated, immutable product catalog.
//!
//! [`Catalog`] is built once from raw [`CatalogData`] and never changes
//! afterwards. All structural assumptions the engine relies on are checked
//! here so that the filter, sort and projection code can be total.

use crate::catalog::backend::CatalogSource;
use crate::catalog::json::BuiltinCatalog;
use crate::catalog::models::{AnimeRecord, CatalogData, CategoryRecord, ProductRecord};
use crate::domain::error::{Result, StorefrontError};
use crate::domain::{AnimeFilter, Category, Product};
use std::collections::{HashMap, HashSet};

/// Largest accepted original price.
pub const MAX_PRICE: u64 = 1_000_000_000;

/// Read-only product catalog with derived category counts.
///
/// Declaration order of products is preserved and is the baseline order for
/// every filtered and sorted result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    anime_filters: Vec<AnimeFilter>,

    /// Product id to position in `products`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Loads and validates a catalog from any source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or the data is invalid.
    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_load", source = %source.describe()).entered();
        let data = source.load()?;
        Self::from_data(data)
    }

    /// Loads the catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is itself invalid.
    pub fn builtin() -> Result<Self> {
        Self::load(&BuiltinCatalog)
    }

    /// Validates raw records and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Catalog`] when:
    /// - an id is empty or duplicated (products, categories, anime filters)
    /// - a product has `original_price == 0` or above [`MAX_PRICE`]
    /// - a sale price is not strictly below the original price
    /// - a product references an unknown category
    pub fn from_data(data: CatalogData) -> Result<Self> {
        validate_unique("category", data.categories.iter().map(|c| c.id.as_str()))?;
        validate_unique("anime filter", data.anime_filters.iter().map(|a| a.id.as_str()))?;
        validate_unique("product", data.products.iter().map(|p| p.id.as_str()))?;

        let category_ids: HashSet<&str> = data.categories.iter().map(|c| c.id.as_str()).collect();
        for record in &data.products {
            validate_product(record, &category_ids)?;
        }

        let categories = data
            .categories
            .iter()
            .map(|record| category_from_record(record, &data.products))
            .collect();

        let anime_filters = data.anime_filters.into_iter().map(anime_from_record).collect();
        let products: Vec<Product> = data.products.into_iter().map(product_from_record).collect();

        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();

        tracing::debug!(product_count = products.len(), "catalog validated");

        Ok(Self {
            products,
            categories,
            anime_filters,
            index,
        })
    }

    /// All products in declaration order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in declaration order, with derived counts.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All anime filters in declaration order, decorative ones included.
    #[must_use]
    pub fn anime_filters(&self) -> &[AnimeFilter] {
        &self.anime_filters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|&position| self.products.get(position))
    }

    /// Looks up a product, failing with [`StorefrontError::ProductNotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if no product has the given id.
    pub fn require_product(&self, id: &str) -> Result<&Product> {
        self.product(id)
            .ok_or_else(|| StorefrontError::ProductNotFound(id.to_string()))
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display name of a category, `None` for unknown ids.
    #[must_use]
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn anime(&self, id: &str) -> Option<&AnimeFilter> {
        self.anime_filters.iter().find(|a| a.id == id)
    }
}

fn validate_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(StorefrontError::Catalog(format!("{kind} with empty id")));
        }
        if !seen.insert(id) {
            return Err(StorefrontError::Catalog(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}

fn validate_product(record: &ProductRecord, category_ids: &HashSet<&str>) -> Result<()> {
    if record.original_price == 0 {
        return Err(StorefrontError::Catalog(format!(
            "product {} has a zero original price",
            record.id
        )));
    }

    if record.original_price > MAX_PRICE {
        return Err(StorefrontError::Catalog(format!(
            "product {} original price {} exceeds {MAX_PRICE}",
            record.id, record.original_price
        )));
    }

    if let Some(sale) = record.sale_price {
        if sale >= record.original_price {
            return Err(StorefrontError::Catalog(format!(
                "product {} sale price {sale} is not below original price {}",
                record.id, record.original_price
            )));
        }
    }

    if !category_ids.contains(record.category_id.as_str()) {
        return Err(StorefrontError::Catalog(format!(
            "product {} references unknown category {}",
            record.id, record.category_id
        )));
    }

    Ok(())
}

fn category_from_record(record: &CategoryRecord, products: &[ProductRecord]) -> Category {
    Category {
        id: record.id.clone(),
        name: record.name.clone(),
        icon: record.icon.clone(),
        count: products.iter().filter(|p| p.category_id == record.id).count(),
    }
}

fn anime_from_record(record: AnimeRecord) -> AnimeFilter {
    AnimeFilter {
        id: record.id,
        name: record.name,
        name_en: record.name_en,
        tag: record.tag.filter(|t| !t.is_empty()),
    }
}

fn product_from_record(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        name: record.name,
        category_id: record.category_id,
        original_price: record.original_price,
        sale_price: record.sale_price,
        tags: record.tags,
        is_new: record.is_new,
        is_best: record.is_best,
        image_url: record.image_url,
    }
}
