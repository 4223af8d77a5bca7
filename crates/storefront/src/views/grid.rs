//! Product listing grid.

use std::cmp::Ordering;

use endenture_core::{Quantity, Rating, SortMode, StarBreakdown};

use crate::catalog::{Catalog, Product};
use crate::navigation::Location;
use crate::state::Command;

/// Rating display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingView {
    /// Accessible label, e.g. "Rated 4.5 out of 5".
    pub label: String,
    pub stars: StarBreakdown,
}

impl From<Rating> for RatingView {
    fn from(rating: Rating) -> Self {
        Self {
            label: format!("Rated {rating} out of {}", Rating::MAX_STARS),
            stars: rating.stars(),
        }
    }
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    /// Primary image, empty if the product has none.
    pub image: String,
    /// Link to the detail page.
    pub href: String,
    pub price: String,
    pub rating: RatingView,
    /// Command fired by the card's "add to cart" button.
    pub add: Command,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        let image = product.primary_image().unwrap_or_default().to_owned();
        let href = Location::ProductDetail {
            id: Some(product.id.clone()),
            image: product.primary_image().map(str::to_owned),
        }
        .href();

        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            image,
            href,
            price: product.price.to_string(),
            rating: RatingView::from(product.rating_or_zero()),
            add: Command::Add {
                id: product.id.clone(),
                quantity: Quantity::ONE,
            },
        }
    }
}

/// Product grid display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub sort: SortMode,
    pub cards: Vec<ProductCardView>,
}

/// Order the catalog listing by `mode`.
///
/// The sort is stable, so products that compare equal keep catalog order.
#[must_use]
pub fn sort_products(products: &[Product], mode: SortMode) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by(|a, b| compare(a, b, mode));
    sorted
}

fn compare(a: &Product, b: &Product, mode: SortMode) -> Ordering {
    match mode {
        SortMode::NameAsc => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortMode::PriceAsc => a.price.cmp(&b.price),
        SortMode::PriceDesc => b.price.cmp(&a.price),
        SortMode::RatingDesc => b.rating_or_zero().cmp(&a.rating_or_zero()),
    }
}

/// Render the full grid for the current catalog and sort mode.
///
/// Pure: calling it again with the same inputs yields the same view.
#[must_use]
pub fn render_grid(catalog: &Catalog, sort: SortMode) -> GridView {
    GridView {
        sort,
        cards: sort_products(catalog.list_all(), sort)
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    }
}
