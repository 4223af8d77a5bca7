//! Storefront session state and command dispatch.
//!
//! [`Storefront`] bundles everything one shopper session needs: the shared
//! catalog, the cart store, and the UI state the renderers depend on. UI
//! layers never touch the cart store directly; they render views and
//! dispatch the [`Command`]s those views carry.

use std::sync::Arc;

use endenture_core::{ProductId, Quantity, SortMode};
use tracing::instrument;

use crate::cart::{AddOutcome, CartBadge, CartStore, CartTotals};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::navigation::Location;
use crate::storage::KeyValueStore;
use crate::views::{self, CartView, DetailView, GridView};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Grid "add to cart".
    Add { id: ProductId, quantity: Quantity },
    /// Detail page "add to cart"; navigates to the cart afterwards.
    AddFromDetail { id: ProductId, quantity: Quantity },
    /// Cart row "remove".
    Remove { id: ProductId },
    /// Set a single line's quantity. Values below one are clamped.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Cart page "update": raw text of every quantity control.
    UpdateCart { quantities: Vec<(ProductId, String)> },
    /// Grid sort selector changed.
    SetSortMode(SortMode),
}

/// What the UI should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    /// Fresh badge count.
    pub badge: CartBadge,
    /// Page to navigate to, if any.
    pub navigate: Option<Location>,
}

/// UI state the renderers read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub sort_mode: SortMode,
    pub fallback_product: ProductId,
}

impl From<&StorefrontConfig> for UiState {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            sort_mode: config.default_sort,
            fallback_product: config.default_product.clone(),
        }
    }
}

/// One shopper session over a storage backend.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Arc<Catalog>,
    cart: CartStore<S>,
    ui: UiState,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Create a session from configuration.
    pub fn new(config: &StorefrontConfig, catalog: Arc<Catalog>, storage: S) -> Self {
        let cart = CartStore::with_key(storage, Arc::clone(&catalog), config.cart_key.clone());
        Self {
            catalog,
            cart,
            ui: UiState::from(config),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Mutable access, e.g. to register change listeners.
    pub const fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    #[must_use]
    pub const fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Apply a command.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the cart cannot be saved. Unknown
    /// products and invalid quantities are not errors.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<Effect> {
        let mut navigate = None;

        match command {
            Command::Add { id, quantity } => {
                self.cart.add(&id, quantity)?;
            }
            Command::AddFromDetail { id, quantity } => {
                if self.cart.add(&id, quantity)? == AddOutcome::UnknownProduct {
                    tracing::debug!(%id, "Detail add ignored");
                }
                navigate = Some(Location::Cart);
            }
            Command::Remove { id } => {
                self.cart.remove(&id)?;
            }
            Command::UpdateQuantity { id, quantity } => {
                self.cart.update_quantity(&id, quantity)?;
            }
            Command::UpdateCart { quantities } => {
                for (id, text) in quantities {
                    let quantity = Quantity::parse_lenient(&text);
                    self.cart.update_quantity(&id, i64::from(quantity.get()))?;
                }
            }
            Command::SetSortMode(mode) => {
                self.ui.sort_mode = mode;
            }
        }

        Ok(Effect {
            badge: self.cart.badge(),
            navigate,
        })
    }

    /// Product grid for the current sort mode.
    #[must_use]
    pub fn grid(&self) -> GridView {
        views::render_grid(&self.catalog, self.ui.sort_mode)
    }

    /// Detail page for the requested id and optional preselected image.
    #[must_use]
    pub fn detail(&self, requested: Option<&str>, image: Option<&str>) -> DetailView {
        views::render_detail(&self.catalog, requested, image, &self.ui.fallback_product)
    }

    /// Cart page.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        views::render_cart(&self.totals())
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    #[must_use]
    pub fn badge(&self) -> CartBadge {
        self.cart.badge()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use endenture_core::Price;

    use super::*;
    use crate::storage::MemoryStore;

    fn storefront() -> Storefront<MemoryStore> {
        Storefront::new(
            &StorefrontConfig::default(),
            Arc::new(Catalog::sample()),
            MemoryStore::new(),
        )
    }

    fn add(id: &str, n: u32) -> Command {
        Command::Add {
            id: ProductId::new(id),
            quantity: Quantity::new(n).unwrap(),
        }
    }

    #[test]
    fn test_grid_add_command_updates_badge() {
        let mut store = storefront();
        let card = store.grid().cards.into_iter().next().unwrap();

        let effect = store.dispatch(card.add).unwrap();
        assert_eq!(effect.badge.count, 1);
        assert_eq!(effect.navigate, None);
    }

    #[test]
    fn test_detail_add_navigates_to_cart() {
        let mut store = storefront();
        let detail = store.detail(Some("backpack"), None);
        let command = detail.product().unwrap().add_command("2");

        let effect = store.dispatch(command).unwrap();
        assert_eq!(effect.navigate, Some(Location::Cart));
        assert_eq!(effect.badge.count, 2);
        assert_eq!(store.cart_view().items[0].line_total, "$498.00");
    }

    #[test]
    fn test_detail_add_unknown_still_navigates() {
        let mut store = storefront();
        let effect = store
            .dispatch(Command::AddFromDetail {
                id: ProductId::new("kayak"),
                quantity: Quantity::ONE,
            })
            .unwrap();
        assert_eq!(effect.navigate, Some(Location::Cart));
        assert_eq!(effect.badge.count, 0);
    }

    #[test]
    fn test_batched_update() {
        let mut store = storefront();
        store.dispatch(add("jacket", 1)).unwrap();
        store.dispatch(add("boots", 1)).unwrap();

        let command = CartView::update_command([("jacket", "3"), ("boots", "zero"), ("gloves", "9")]);
        let effect = store.dispatch(command).unwrap();

        let view = store.cart_view();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.items[1].quantity, 1);
        assert_eq!(effect.badge.count, 4);
    }

    #[test]
    fn test_remove_rerenders_immediately() {
        let mut store = storefront();
        store.dispatch(add("jacket", 1)).unwrap();
        let remove = store.cart_view().items[0].remove.clone();

        store.dispatch(remove.clone()).unwrap();
        assert!(store.cart_view().is_empty());

        // Removing again is harmless.
        let effect = store.dispatch(remove).unwrap();
        assert_eq!(effect.badge.count, 0);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let mut store = storefront();
        store.dispatch(add("gloves", 5)).unwrap();
        store
            .dispatch(Command::UpdateQuantity {
                id: ProductId::new("gloves"),
                quantity: -3,
            })
            .unwrap();
        assert_eq!(store.badge().count, 1);
    }

    #[test]
    fn test_set_sort_mode_rerenders_grid() {
        let mut store = storefront();
        assert_eq!(store.grid().sort, SortMode::NameAsc);

        store
            .dispatch(Command::SetSortMode(SortMode::PriceAsc))
            .unwrap();
        let grid = store.grid();
        assert_eq!(grid.sort, SortMode::PriceAsc);
        assert_eq!(grid.cards[0].id, "waterbottle");
        assert_eq!(store.ui().sort_mode, SortMode::PriceAsc);
    }

    #[test]
    fn test_detail_uses_configured_fallback() {
        let config = StorefrontConfig {
            default_product: ProductId::new("boots"),
            ..StorefrontConfig::default()
        };
        let store = Storefront::new(&config, Arc::new(Catalog::sample()), MemoryStore::new());
        let view = store.detail(None, None);
        assert_eq!(view.product().unwrap().id.as_str(), "boots");
    }

    #[test]
    fn test_listener_sees_dispatches() {
        let mut store = storefront();
        let counts = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&counts);
        store
            .cart_mut()
            .on_change(move |badge| sink.borrow_mut().push(badge.count));

        store.dispatch(add("jacket", 2)).unwrap();
        store.dispatch(add("jacket", 1)).unwrap();

        assert_eq!(*counts.borrow(), [2, 3]);
        assert_eq!(store.totals().subtotal, Price::from_cents(149_700).unwrap());
    }
}
