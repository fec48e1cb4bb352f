//! Domain layer for the storefront.
//!
//! Core record types and the crate error, independent of how the catalog is
//! loaded or how results are displayed.
//!
//! # Organization
//!
//! - [`error`]: Error type and result alias
//! - [`product`]: Product record and price arithmetic
//! - [`category`]: Categories and anime filters

pub mod category;
pub mod error;
pub mod product;

pub use category::{AnimeFilter, Category};
pub use error::{Result, StorefrontError};
pub use product::Product;
