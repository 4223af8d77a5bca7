//! Product detail page.

use endenture_core::{ProductId, Quantity};

use crate::catalog::{Catalog, Product};
use crate::state::Command;
use crate::views::grid::RatingView;

/// Shown when neither the requested nor the fallback product exists.
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";

/// Secondary images shown beside the hero.
pub const MAX_THUMBNAILS: usize = 4;

/// Gallery thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub src: String,
    pub alt: String,
}

/// Product detail display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub description: String,
    pub rating: RatingView,
    /// Image currently shown large; empty if the product has no images.
    pub hero: String,
    pub hero_alt: String,
    /// Images after the primary one, in catalog order.
    pub thumbnails: Vec<ThumbnailView>,
}

impl ProductDetailView {
    fn new(product: &Product, image: Option<&str>) -> Self {
        let images: Vec<&str> = product
            .images
            .iter()
            .map(String::as_str)
            .filter(|src| !src.is_empty())
            .collect();

        let hero = image
            .filter(|requested| images.contains(requested))
            .or_else(|| images.first().copied())
            .unwrap_or_default()
            .to_owned();

        let thumbnails = images
            .iter()
            .skip(1)
            .take(MAX_THUMBNAILS)
            .enumerate()
            .map(|(i, &src)| ThumbnailView {
                src: src.to_owned(),
                alt: format!("{} {}", product.name, i + 2),
            })
            .collect();

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            rating: RatingView::from(product.rating_or_zero()),
            hero,
            hero_alt: product.name.clone(),
            thumbnails,
        }
    }

    /// Whether the thumbnail strip should be shown at all.
    #[must_use]
    pub fn has_gallery(&self) -> bool {
        !self.thumbnails.is_empty()
    }

    /// Show a thumbnail's image as the hero.
    ///
    /// Only listed thumbnails are accepted; the thumbnail order never
    /// changes. Returns whether the hero changed.
    pub fn select_thumbnail(&mut self, src: &str) -> bool {
        if self.hero == src || !self.thumbnails.iter().any(|t| t.src == src) {
            return false;
        }
        src.clone_into(&mut self.hero);
        true
    }

    /// Command for the "add to cart" button given the raw quantity field.
    ///
    /// Empty or non-numeric input adds one unit.
    #[must_use]
    pub fn add_command(&self, quantity_input: &str) -> Command {
        Command::AddFromDetail {
            id: self.id.clone(),
            quantity: Quantity::parse_lenient(quantity_input),
        }
    }
}

/// Detail page outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found(Box<ProductDetailView>),
    NotFound { message: &'static str },
}

impl DetailView {
    #[must_use]
    pub fn product(&self) -> Option<&ProductDetailView> {
        match self {
            Self::Found(view) => Some(view),
            Self::NotFound { .. } => None,
        }
    }
}

/// Render the detail page.
///
/// A missing or unknown `requested` id shows the `fallback` product instead.
/// `image` preselects the hero when it is one of the product's images.
#[must_use]
pub fn render_detail(
    catalog: &Catalog,
    requested: Option<&str>,
    image: Option<&str>,
    fallback: &ProductId,
) -> DetailView {
    let product = requested
        .and_then(|id| catalog.lookup(id))
        .or_else(|| catalog.lookup(fallback.as_str()));

    match product {
        Some(product) => DetailView::Found(Box::new(ProductDetailView::new(product, image))),
        None => DetailView::NotFound {
            message: NOT_FOUND_MESSAGE,
        },
    }
}
