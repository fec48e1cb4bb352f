//! Catalog store: loading, validation and read-only access.
//!
//! # Modules
//!
//! - `backend`: the [`CatalogSource`] trait
//! - `json`: embedded and file-based JSON sources
//! - `models`: raw records as stored in the data file
//! - `store`: the validated [`Catalog`]

pub mod backend;
pub mod json;
pub mod models;
pub mod store;

pub use backend::CatalogSource;
pub use json::{parse_catalog, BuiltinCatalog, JsonCatalog};
pub use models::{AnimeRecord, CatalogData, CategoryRecord, ProductRecord};
pub use store::{Catalog, MAX_PRICE};
