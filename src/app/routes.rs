//! Storefront routes and URL parsing.
//!
//! A [`Route`] is parsed from a path-and-query string such as
//! `/products?category=wig` or `/search?q=%EC%9B%90%EC%8B%A0`. Query values are
//! percent-decoded with `+` read as a space. Unknown paths resolve to
//! [`Route::Home`].

use crate::engine::CategorySelection;
use std::fmt;

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/products?category=…`
    Products { category: CategorySelection },
    /// `/products/{id}`
    ProductDetail { id: String },
    /// `/search?q=…`
    Search { query: String },
    /// `/cart`
    Cart,
}

impl Route {
    /// Parses a path with an optional query string.
    ///
    /// # Example
    ///
    /// ```
    /// use hellowshop::app::Route;
    /// use hellowshop::engine::CategorySelection;
    ///
    /// assert_eq!(
    ///     Route::parse("/products?category=wig"),
    ///     Route::Products { category: CategorySelection::Category("wig".into()) }
    /// );
    /// assert_eq!(
    ///     Route::parse("/search?q=%EC%9B%90%EC%8B%A0+%EC%BD%94%EC%8A%A4%ED%8A%AC"),
    ///     Route::Search { query: "원신 코스튬".into() }
    /// );
    /// assert_eq!(Route::parse("/nowhere"), Route::Home);
    /// ```
    #[must_use]
    pub fn parse(path_and_query: &str) -> Self {
        let input = path_and_query.trim();
        let (path, query) = input.split_once('?').unwrap_or((input, ""));
        let path = path.trim_end_matches('/');

        let route = match path {
            "" => Self::Home,
            "/products" => Self::Products {
                category: CategorySelection::from_param(
                    &query_param(query, "category").unwrap_or_default(),
                ),
            },
            "/search" => Self::Search {
                query: query_param(query, "q").unwrap_or_default(),
            },
            "/cart" => Self::Cart,
            _ => match path.strip_prefix("/products/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::ProductDetail {
                    id: decode_component(id),
                },
                _ => Self::Home,
            },
        };

        tracing::trace!(input = %input, route = ?route, "route parsed");
        route
    }

    /// The canonical path for this route, with encoded query values.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Products { category } => match category.id() {
                Some(id) => format!("/products?category={}", urlencoding::encode(id)),
                None => "/products".to_string(),
            },
            Self::ProductDetail { id } => format!("/products/{}", urlencoding::encode(id)),
            Self::Search { query } if query.is_empty() => "/search".to_string(),
            Self::Search { query } => format!("/search?q={}", urlencoding::encode(query)),
            Self::Cart => "/cart".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Value of the first `key` parameter in a query string, decoded.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode_component(v))
}

/// Percent-decodes a URL component, reading `+` as a space. Malformed
/// sequences are kept verbatim.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), |decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("/products"),
            Route::Products {
                category: CategorySelection::All
            }
        );
        assert_eq!(
            Route::parse("/products/12"),
            Route::ProductDetail { id: "12".into() }
        );
        assert_eq!(Route::parse("/cart/"), Route::Cart);
        assert_eq!(
            Route::parse("/search"),
            Route::Search {
                query: String::new()
            }
        );
    }

    #[test]
    fn decodes_plus_and_percent() {
        assert_eq!(
            Route::parse("/search?q=blue+archive%21"),
            Route::Search {
                query: "blue archive!".into()
            }
        );
    }

    #[test]
    fn ignores_other_parameters() {
        assert_eq!(
            Route::parse("/products?sort=discount&category=boots&category=wig"),
            Route::Products {
                category: CategorySelection::Category("boots".into())
            }
        );
    }

    #[test]
    fn malformed_escape_is_kept() {
        assert_eq!(
            Route::parse("/search?q=100%"),
            Route::Search {
                query: "100%".into()
            }
        );
    }

    #[test]
    fn unknown_paths_go_home() {
        assert_eq!(Route::parse("/products/1/reviews"), Route::Home);
        assert_eq!(Route::parse("/admin"), Route::Home);
    }

    #[test]
    fn canonical_paths_parse_back() {
        let routes = [
            Route::Home,
            Route::Products {
                category: CategorySelection::Category("accessories".into()),
            },
            Route::ProductDetail { id: "7".into() },
            Route::Search {
                query: "원신 코스튬".into(),
            },
            Route::Cart,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_path()), route);
        }
    }
}
