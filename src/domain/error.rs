//! Error types for the storefront engine.
//!
//! This module defines the centralized error type [`StorefrontError`] and a type
//! alias [`Result`] used throughout the crate. Filtering, sorting and projection
//! are total functions and never produce errors; failures only happen at the
//! edges (catalog loading, configuration, themes) or when a product id does not
//! resolve.

use thiserror::Error;

/// The main error type for storefront operations.
///
/// # Examples
///
/// ```
/// use hellowshop::StorefrontError;
///
/// fn open_detail(id: &str) -> Result<(), StorefrontError> {
///     Err(StorefrontError::ProductNotFound(id.to_string()))
/// }
///
/// assert!(open_detail("missing").is_err());
/// ```
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog data failed validation at the load boundary.
    ///
    /// Raised for duplicate ids, zero or out-of-range prices, sale prices
    /// that are not below the original price, or products referencing
    /// unknown categories.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A product id did not resolve against the catalog.
    ///
    /// The app layer turns this into a not-found view state rather than
    /// surfacing it as a failure.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
