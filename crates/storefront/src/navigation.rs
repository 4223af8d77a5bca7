//! Page locations and their query state.
//!
//! The storefront has three pages. Each is addressed by a relative href the
//! UI layer can follow, and an href can be parsed back into a [`Location`]
//! to recover navigation state such as the requested product id.

use endenture_core::{ProductId, SortMode};
use thiserror::Error;
use url::Url;
use url::form_urlencoded;

const PRODUCTS_PAGE: &str = "products.html";
const PRODUCT_DETAIL_PAGE: &str = "product-details.html";
const CART_PAGE: &str = "cart.html";

/// Base used to resolve relative hrefs; never rendered.
const RESOLVE_BASE: &str = "https://storefront.invalid/";

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("invalid location: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

/// A navigable storefront page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Product grid with the selected ordering.
    Products { sort: SortMode },
    /// Product detail page. `id` may be missing; `image` preselects the hero.
    ProductDetail {
        id: Option<ProductId>,
        image: Option<String>,
    },
    /// Cart page.
    Cart,
}

impl Location {
    /// Detail page for a product.
    #[must_use]
    pub const fn product(id: ProductId) -> Self {
        Self::ProductDetail {
            id: Some(id),
            image: None,
        }
    }

    /// Relative href for this page.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Products { sort } if *sort == SortMode::default() => PRODUCTS_PAGE.to_owned(),
            Self::Products { sort } => format!("{PRODUCTS_PAGE}?{}", query(&[("sort", sort.token())])),
            Self::ProductDetail { id, image } => {
                let mut pairs = Vec::with_capacity(2);
                if let Some(id) = id {
                    pairs.push(("id", id.as_str()));
                }
                if let Some(image) = image {
                    pairs.push(("img", image.as_str()));
                }
                if pairs.is_empty() {
                    PRODUCT_DETAIL_PAGE.to_owned()
                } else {
                    format!("{PRODUCT_DETAIL_PAGE}?{}", query(&pairs))
                }
            }
            Self::Cart => CART_PAGE.to_owned(),
        }
    }

    /// Parse a relative or absolute href.
    ///
    /// Unknown sort tokens fall back to name ordering; empty `id` and `img`
    /// values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidUrl`] if the href cannot be parsed
    /// and [`NavigationError::UnknownPage`] if it names another page.
    pub fn parse(href: &str) -> Result<Self, NavigationError> {
        let base = Url::parse(RESOLVE_BASE)?;
        let url = Url::options().base_url(Some(&base)).parse(href)?;

        let page = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        };

        match page {
            PRODUCTS_PAGE => Ok(Self::Products {
                sort: SortMode::from_token_or_default(param("sort").as_deref()),
            }),
            PRODUCT_DETAIL_PAGE => Ok(Self::ProductDetail {
                id: param("id").map(ProductId::from),
                image: param("img"),
            }),
            CART_PAGE => Ok(Self::Cart),
            other => Err(NavigationError::UnknownPage(other.to_owned())),
        }
    }
}

fn query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs() {
        assert_eq!(
            Location::Products {
                sort: SortMode::NameAsc
            }
            .href(),
            "products.html"
        );
        assert_eq!(
            Location::Products {
                sort: SortMode::PriceDesc
            }
            .href(),
            "products.html?sort=price_desc"
        );
        assert_eq!(
            Location::product(ProductId::new("jacket")).href(),
            "product-details.html?id=jacket"
        );
        assert_eq!(Location::Cart.href(), "cart.html");
    }

    #[test]
    fn test_href_encodes_query_values() {
        let location = Location::ProductDetail {
            id: Some(ProductId::new("jacket")),
            image: Some("images/product 1.jpg".to_string()),
        };
        assert_eq!(
            location.href(),
            "product-details.html?id=jacket&img=images%2Fproduct+1.jpg"
        );
        assert_eq!(Location::parse(&location.href()).unwrap(), location);
    }

    #[test]
    fn test_parse_detail_query() {
        assert_eq!(
            Location::parse("product-details.html?id=boots").unwrap(),
            Location::product(ProductId::new("boots"))
        );
        assert_eq!(
            Location::parse("/shop/product-details.html").unwrap(),
            Location::ProductDetail {
                id: None,
                image: None
            }
        );
        assert_eq!(
            Location::parse("product-details.html?id=").unwrap(),
            Location::ProductDetail {
                id: None,
                image: None
            }
        );
    }

    #[test]
    fn test_parse_products_sort() {
        assert_eq!(
            Location::parse("products.html?sort=rating_desc").unwrap(),
            Location::Products {
                sort: SortMode::RatingDesc
            }
        );
        assert_eq!(
            Location::parse("products.html?sort=cheapest").unwrap(),
            Location::Products {
                sort: SortMode::NameAsc
            }
        );
    }

    #[test]
    fn test_parse_absolute_cart() {
        assert_eq!(
            Location::parse("https://shop.example.com/cart.html").unwrap(),
            Location::Cart
        );
    }

    #[test]
    fn test_parse_unknown_page() {
        assert!(matches!(
            Location::parse("about.html"),
            Err(NavigationError::UnknownPage(page)) if page == "about.html"
        ));
    }
}
