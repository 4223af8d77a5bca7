//! Static product catalog.
//!
//! The catalog is reference data: built once at startup, never mutated, and
//! shared read-only (behind an `Arc`) by the cart store and the renderers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use endenture_core::{Price, ProductId, Rating};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A product in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image references, primary first. May be empty.
    #[serde(default)]
    pub images: Vec<String>,
    /// Review rating, if the product has one.
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Plain text description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// The primary image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The rating used for ordering; unrated products count as zero.
    #[must_use]
    pub fn rating_or_zero(&self) -> Rating {
        self.rating.unwrap_or_default()
    }
}

/// Immutable product lookup table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the given definition order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON (including negative
    /// prices and out-of-range ratings) and [`CatalogError::DuplicateId`] for
    /// repeated ids.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Catalog::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in outdoor gear catalog.
    #[must_use]
    pub fn sample() -> Self {
        let products = vec![
            sample_product(
                "jacket",
                "Waterproof Jacket",
                49_900,
                &[
                    "images/product-1.jpg",
                    "images/product-1-alt1.jpg",
                    "images/product-1-alt2.jpg",
                    "images/product-1-alt3.jpg",
                ],
                40,
                "Built for storms, designed for speed. 3\u{2011}layer breathable membrane keeps you dry while the articulated fit moves with you.",
            ),
            sample_product(
                "backpack",
                "Light-Weight Backpack",
                24_900,
                &["images/product-2.jpg"],
                45,
                "Featherweight pack with supportive frame and thoughtful pocketing for big miles.",
            ),
            sample_product(
                "hikingstick",
                "Black Diamond Hiking Stick",
                19_900,
                &["images/product-3.jpg"],
                45,
                "Durable, adjustable trekking pole for stability on varied terrain.",
            ),
            sample_product(
                "waterbottle",
                "Water Bottle",
                3_900,
                &["images/product-4.jpg"],
                40,
                "Insulated, leak\u{2011}proof bottle to keep drinks cold or hot for hours.",
            ),
            sample_product(
                "boots",
                "Waterproof Hiking Boots",
                14_900,
                &["images/product-5.jpg"],
                45,
                "All\u{2011}terrain waterproof boots with grippy outsole.",
            ),
            sample_product(
                "gloves",
                "Fleece Glove with Hardloop",
                6_500,
                &["images/product-6.jpg"],
                45,
                "Warm, breathable fleece gloves with loop for quick clipping.",
            ),
        ];

        let index = products
            .iter()
            .enumerate()
            .map(|(position, p)| (p.id.clone(), position))
            .collect();
        Self { products, index }
    }

    /// Find a product by id.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Whether the catalog knows this id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Every product, in definition order.
    #[must_use]
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn sample_product(
    id: &str,
    name: &str,
    cents: u32,
    images: &[&str],
    rating_tenths: u8,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(i64::from(cents)).unwrap_or(Price::ZERO),
        images: images.iter().map(|&s| s.to_owned()).collect(),
        rating: Rating::new(Decimal::new(i64::from(rating_tenths), 1)).ok(),
        description: description.to_owned(),
    }
}
