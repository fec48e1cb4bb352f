//! Catalog source abstraction.
//!
//! The [`CatalogSource`] trait decouples where catalog data comes from (the
//! embedded default data set, a JSON file on disk) from the validated
//! [`Catalog`](crate::catalog::Catalog) the engine works on.

use crate::catalog::models::CatalogData;
use crate::domain::error::Result;

/// A provider of raw catalog data.
///
/// Implementations only read and decode; validation is done once by
/// [`Catalog::from_data`](crate::catalog::Catalog::from_data).
///
/// # Implementations
///
/// - [`BuiltinCatalog`](crate::catalog::BuiltinCatalog): data compiled into the binary
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): data read from a JSON file
///
/// # Examples
///
/// ```
/// use hellowshop::catalog::{BuiltinCatalog, Catalog, CatalogSource};
///
/// let catalog = Catalog::load(&BuiltinCatalog)?;
/// assert!(!catalog.products().is_empty());
/// # Ok::<(), hellowshop::StorefrontError>(())
/// ```
pub trait CatalogSource {
    /// Short description used in logs.
    fn describe(&self) -> String;

    /// Reads and decodes the catalog data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or is not valid JSON.
    fn load(&self) -> Result<CatalogData>;
}
