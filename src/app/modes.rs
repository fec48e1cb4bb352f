//! Page modes.
//!
//! [`Page`] is what the screen currently shows. It is derived from the
//! [`Route`](crate::app::Route) when navigating, except for the detail page,
//! whose lookup can fail and land on [`Page::NotFound`] instead.

/// The page being displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Page {
    /// Banner, quick category buttons, highlights and the home product grid.
    #[default]
    Home,

    /// Category tabs, anime filters, sort selector and results.
    Listing,

    /// A single product with its quantity selector and related products.
    Detail {
        product_id: String,
        /// Selected quantity, never below 1.
        quantity: u32,
    },

    /// The requested product id does not exist.
    NotFound { requested_id: String },

    /// Search box and results.
    Search,

    Cart,
}

impl Page {
    /// Short name used in logs and the footer.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Listing => "listing",
            Self::Detail { .. } => "detail",
            Self::NotFound { .. } => "not-found",
            Self::Search => "search",
            Self::Cart => "cart",
        }
    }
}
