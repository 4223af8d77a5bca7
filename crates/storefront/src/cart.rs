//! Persisted shopping cart.
//!
//! The whole cart is one JSON array stored under a single fixed key:
//!
//! ```json
//! [{"id": "jacket", "name": "Waterproof Jacket", "price": 499.0, "qty": 1}]
//! ```
//!
//! [`CartStore`] is the only writer of that slot. Every mutator loads the
//! current value, applies the change, and writes the full cart back, then
//! notifies registered listeners with the new [`CartBadge`].
//!
//! Cart state is disposable UI state, so reads fail open: a missing,
//! unreadable, or malformed value is treated as an empty cart. Writes are
//! the one place storage errors reach the caller.

use std::fmt;
use std::sync::Arc;

use endenture_core::{Price, ProductId, Quantity};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, instrument, warn};

use crate::catalog::Catalog;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key used when none is configured.
pub const DEFAULT_CART_KEY: &str = "endenture.cart.v1";

/// One product's entry in the cart.
///
/// `name` and `price` are snapshots taken when the product was first added
/// and are not refreshed if the catalog later changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub qty: Quantity,
}

impl LineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// An ordered list of line items with at most one entry per product.
///
/// Serializes as a bare array. Deserializing goes through
/// [`Cart::from_items`], so repeated ids are merged there too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self::from_items(items)
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw items, merging repeated product ids into the
    /// first occurrence.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            match cart.find_mut(item.id.as_str()) {
                Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
                None => cart.items.push(item),
            }
        }
        cart
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id.as_str() == id)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty.get())).sum()
    }

    /// Sum of every line total.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

/// Item count shown on the header cart badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartBadge {
    pub count: u64,
}

impl From<&Cart> for CartBadge {
    fn from(cart: &Cart) -> Self {
        Self {
            count: cart.item_count(),
        }
    }
}

/// Cart contents with computed money totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotals {
    pub items: Vec<LineItem>,
    pub subtotal: Price,
    pub total: Price,
}

impl From<Cart> for CartTotals {
    fn from(cart: Cart) -> Self {
        let subtotal = cart.subtotal();
        Self {
            total: order_total(subtotal),
            subtotal,
            items: cart.into_items(),
        }
    }
}

/// Amount due for a given subtotal.
///
/// Shipping and tax are not charged yet, so this is the subtotal itself.
const fn order_total(subtotal: Price) -> Price {
    subtotal
}

/// Result of [`CartStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added,
    /// An existing line's quantity was increased to `qty`.
    Merged { qty: Quantity },
    /// The catalog has no such product; nothing changed.
    UnknownProduct,
}

type Listener = Box<dyn FnMut(CartBadge)>;

/// Owner of the persisted cart.
pub struct CartStore<S> {
    storage: S,
    key: String,
    catalog: Arc<Catalog>,
    listeners: Vec<Listener>,
}

impl<S> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("catalog_len", &self.catalog.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over `storage` using the default key.
    pub fn new(storage: S, catalog: Arc<Catalog>) -> Self {
        Self::with_key(storage, catalog, DEFAULT_CART_KEY)
    }

    /// Create a store over `storage` using a custom key.
    pub fn with_key(storage: S, catalog: Arc<Catalog>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            catalog,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Register a callback run after every successful save.
    pub fn on_change(&mut self, listener: impl FnMut(CartBadge) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read the persisted cart.
    ///
    /// Never fails: absent, unreadable, or malformed data yields an empty
    /// cart. Quantities below one load as one, and repeated ids are merged.
    #[must_use]
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read cart, treating as empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding malformed cart");
                Cart::new()
            }
        }
    }

    /// Persist the full cart, replacing any previous value, then notify
    /// listeners.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be encoded or the backend
    /// rejects the write. Nothing is written and no listener runs in that
    /// case.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let json = serde_json::to_string(cart)?;
        self.storage.set(&self.key, &json)?;
        self.notify(CartBadge::from(cart));
        Ok(())
    }

    /// Add `quantity` units of a catalog product.
    ///
    /// Unknown products are ignored without touching storage. A product
    /// already in the cart has its quantity increased; otherwise a new line
    /// is appended with the catalog's current name and price.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be saved.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn add(&mut self, id: &ProductId, quantity: Quantity) -> Result<AddOutcome, StorageError> {
        let Some(product) = self.catalog.lookup(id.as_str()) else {
            debug!("Ignoring add for unknown product");
            return Ok(AddOutcome::UnknownProduct);
        };

        let mut cart = self.load();
        let outcome = match cart.find_mut(id.as_str()) {
            Some(item) => {
                item.qty = item.qty.saturating_add(quantity);
                AddOutcome::Merged { qty: item.qty }
            }
            None => {
                cart.items.push(LineItem {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    price: product.price,
                    qty: quantity,
                });
                AddOutcome::Added
            }
        };

        self.save(&cart)?;
        debug!(?outcome, "Added to cart");
        Ok(outcome)
    }

    /// Remove a product's line. Returns whether a line was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be saved.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn remove(&mut self, id: &ProductId) -> Result<bool, StorageError> {
        let mut cart = self.load();
        let before = cart.len();
        cart.items.retain(|item| item.id != *id);
        let removed = cart.len() != before;

        self.save(&cart)?;
        debug!(removed, "Removed from cart");
        Ok(removed)
    }

    /// Set a line's quantity, clamping anything below one up to one.
    /// Products not in the cart are left alone. Returns whether a line was
    /// updated.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be saved.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, StorageError> {
        let mut cart = self.load();
        let updated = match cart.find_mut(id.as_str()) {
            Some(item) => {
                item.qty = Quantity::clamped(quantity);
                true
            }
            None => false,
        };

        self.save(&cart)?;
        debug!(updated, "Updated cart quantity");
        Ok(updated)
    }

    /// Delete the persisted cart entirely.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the delete.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)?;
        self.notify(CartBadge::default());
        Ok(())
    }

    /// Current items with subtotal and total.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self.load())
    }

    /// Current badge count.
    #[must_use]
    pub fn badge(&self) -> CartBadge {
        CartBadge::from(&self.load())
    }

    fn notify(&mut self, badge: CartBadge) {
        for listener in &mut self.listeners {
            listener(badge);
        }
    }
}
