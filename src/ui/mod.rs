//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready page data
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Price formatting, column arithmetic, match highlighting
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PageBody, ProductCard, SearchBarInfo, UIViewModel,
};
