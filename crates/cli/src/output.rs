//! Plain-text pages rendered from the storefront view models.

use std::io::{self, Write};

use askama::Template;
use endenture_core::{SortMode, StarBreakdown};
use endenture_storefront::cart::CartBadge;
use endenture_storefront::views::{
    CartItemView, CartView, DetailView, GridView, ProductCardView, ProductDetailView,
};
use thiserror::Error;

/// Errors that can occur while printing a page.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Write failed: {0}")]
    Io(#[from] io::Error),
}

/// Star strip such as `★★★★½`.
pub fn stars(breakdown: StarBreakdown) -> String {
    let mut strip = String::new();
    strip.push_str(&"★".repeat(usize::from(breakdown.full)));
    strip.push_str(&"½".repeat(usize::from(breakdown.half)));
    strip.push_str(&"☆".repeat(usize::from(breakdown.empty)));
    strip
}

/// One product in the grid.
pub struct CardRow<'a> {
    id: &'a str,
    name: &'a str,
    price: &'a str,
    href: &'a str,
    stars: String,
    rating: &'a str,
}

impl<'a> From<&'a ProductCardView> for CardRow<'a> {
    fn from(card: &'a ProductCardView) -> Self {
        Self {
            id: &card.id,
            name: &card.name,
            price: &card.price,
            href: &card.href,
            stars: stars(card.rating.stars),
            rating: &card.rating.label,
        }
    }
}

/// Product grid page.
#[derive(Template)]
#[template(path = "grid.txt")]
pub struct GridTemplate<'a> {
    sort: SortMode,
    cards: Vec<CardRow<'a>>,
}

impl<'a> From<&'a GridView> for GridTemplate<'a> {
    fn from(view: &'a GridView) -> Self {
        Self {
            sort: view.sort,
            cards: view.cards.iter().map(CardRow::from).collect(),
        }
    }
}

/// Gallery thumbnail; `marker` flags the one shown large.
pub struct ThumbRow<'a> {
    marker: char,
    src: &'a str,
}

/// Product detail page.
#[derive(Template)]
#[template(path = "detail.txt")]
pub struct DetailTemplate<'a> {
    id: &'a str,
    name: &'a str,
    price: &'a str,
    stars: String,
    rating: &'a str,
    hero: &'a str,
    gallery: Vec<ThumbRow<'a>>,
    description: &'a str,
}

impl<'a> From<&'a ProductDetailView> for DetailTemplate<'a> {
    fn from(product: &'a ProductDetailView) -> Self {
        let gallery = product
            .thumbnails
            .iter()
            .map(|thumb| ThumbRow {
                marker: if thumb.src == product.hero { '*' } else { ' ' },
                src: &thumb.src,
            })
            .collect();

        Self {
            id: product.id.as_str(),
            name: &product.name,
            price: &product.price,
            stars: stars(product.rating.stars),
            rating: &product.rating.label,
            hero: &product.hero,
            gallery,
            description: &product.description,
        }
    }
}

/// Detail page when no product could be shown.
#[derive(Template)]
#[template(path = "not_found.txt")]
pub struct NotFoundTemplate<'a> {
    message: &'a str,
}

/// Cart page.
#[derive(Template)]
#[template(path = "cart.txt")]
pub struct CartTemplate<'a> {
    items: &'a [CartItemView],
    item_count: u64,
    subtotal: &'a str,
    total: &'a str,
}

impl<'a> From<&'a CartView> for CartTemplate<'a> {
    fn from(view: &'a CartView) -> Self {
        Self {
            items: &view.items,
            item_count: view.item_count,
            subtotal: &view.subtotal,
            total: &view.total,
        }
    }
}

/// Header badge count.
#[derive(Template)]
#[template(path = "cart_count.txt")]
pub struct CartCountTemplate {
    count: u64,
}

/// Render `template` and write it as one newline-terminated block.
fn page(out: &mut impl Write, template: &impl Template) -> Result<(), OutputError> {
    let rendered = template.render()?;
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

pub fn grid(out: &mut impl Write, view: &GridView) -> Result<(), OutputError> {
    page(out, &GridTemplate::from(view))
}

pub fn detail(out: &mut impl Write, view: &DetailView) -> Result<(), OutputError> {
    match view {
        DetailView::Found(product) => page(out, &DetailTemplate::from(&**product)),
        DetailView::NotFound { message } => page(out, &NotFoundTemplate { message: *message }),
    }
}

pub fn cart(out: &mut impl Write, view: &CartView) -> Result<(), OutputError> {
    page(out, &CartTemplate::from(view))
}

pub fn badge(out: &mut impl Write, badge: CartBadge) -> Result<(), OutputError> {
    page(out, &CartCountTemplate { count: badge.count })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use endenture_storefront::catalog::Catalog;
    use endenture_storefront::config::StorefrontConfig;
    use endenture_storefront::state::Storefront;
    use endenture_storefront::storage::MemoryStore;

    use super::*;

    fn session() -> Storefront<MemoryStore> {
        Storefront::new(
            &StorefrontConfig::default(),
            Arc::new(Catalog::sample()),
            MemoryStore::new(),
        )
    }

    #[test]
    fn test_stars_strip() {
        let strip = stars(StarBreakdown {
            full: 4,
            half: 1,
            empty: 0,
        });
        assert_eq!(strip, "★★★★½");
    }

    #[test]
    fn test_empty_cart_text() {
        let mut out = Vec::new();
        cart(&mut out, &CartView::empty()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Your cart is empty.\nItems:    0\nSubtotal: $0.00\nTotal:    $0.00\n"
        );
    }

    #[test]
    fn test_cart_rows_text() {
        let mut store = session();
        store
            .dispatch(endenture_storefront::state::Command::AddFromDetail {
                id: "waterbottle".into(),
                quantity: endenture_core::Quantity::new(2).unwrap(),
            })
            .unwrap();

        let mut out = Vec::new();
        cart(&mut out, &store.cart_view()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Water Bottle [waterbottle]  $39.00 x 2 = $78.00\n\
             \n\
             Items:    2\n\
             Subtotal: $78.00\n\
             Total:    $78.00\n"
        );
    }

    #[test]
    fn test_detail_marks_hero_thumbnail() {
        let store = session();
        let mut view = store.detail(Some("jacket"), None);
        if let DetailView::Found(product) = &mut view {
            let src = product.thumbnails[0].src.clone();
            assert!(product.select_thumbnail(&src));
        }

        let mut out = Vec::new();
        detail(&mut out, &view).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Waterproof Jacket [jacket]\n$499.00\n"));
        assert!(text.contains("Image: images/product-1-alt1.jpg\nGallery:\n"));
        assert_eq!(text.lines().filter(|line| line.starts_with(" * ")).count(), 1);
        assert!(text.ends_with("moves with you.\n"));
    }

    #[test]
    fn test_detail_without_gallery() {
        let store = session();
        let mut out = Vec::new();
        detail(&mut out, &store.detail(Some("boots"), None)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Gallery:"));
        assert!(text.contains("Image: images/product-5.jpg\n\nAll"));
    }

    #[test]
    fn test_not_found_text() {
        let mut out = Vec::new();
        detail(
            &mut out,
            &DetailView::NotFound {
                message: "Product not found.",
            },
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Product not found.\n");
    }

    #[test]
    fn test_grid_lists_every_card() {
        let mut out = Vec::new();
        grid(&mut out, &session().grid()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "Products (sorted by name_asc)\n\nBlack Diamond Hiking Stick [hikingstick]  $199.00\n"
        ));
        assert_eq!(text.matches("product-details.html?id=").count(), 6);
        assert!(text.contains("&img=images%2Fproduct-"));
    }

    #[test]
    fn test_badge_text() {
        let mut out = Vec::new();
        badge(&mut out, CartBadge { count: 7 }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7\n");
    }
}
