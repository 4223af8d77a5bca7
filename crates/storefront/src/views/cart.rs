//! Cart page.

use endenture_core::{Price, ProductId};

use crate::cart::{CartTotals, LineItem};
use crate::state::Command;

/// Cart row display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    /// Current value of the row's quantity control (never below 1).
    pub quantity: u32,
    pub line_total: String,
    /// Command fired by the row's remove button.
    pub remove: Command,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price.to_string(),
            quantity: item.qty.get(),
            line_total: item.line_total().to_string(),
            remove: Command::Remove {
                id: item.id.clone(),
            },
        }
    }
}

/// Cart page display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// An empty cart with zeroed totals.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::ZERO.to_string(),
            total: Price::ZERO.to_string(),
            item_count: 0,
        }
    }

    /// Whether to show the empty-cart indicator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Batched update command from the raw text of every visible quantity
    /// control.
    #[must_use]
    pub fn update_command<I, K, V>(inputs: I) -> Command
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ProductId>,
        V: Into<String>,
    {
        Command::UpdateCart {
            quantities: inputs
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        }
    }

    /// Each row's id with its quantity as control text.
    #[must_use]
    pub fn current_quantities(&self) -> Vec<(ProductId, String)> {
        self.items
            .iter()
            .map(|item| (item.id.clone(), item.quantity.to_string()))
            .collect()
    }
}

/// Render the cart page.
#[must_use]
pub fn render_cart(totals: &CartTotals) -> CartView {
    if totals.items.is_empty() {
        return CartView::empty();
    }

    CartView {
        items: totals.items.iter().map(CartItemView::from).collect(),
        subtotal: totals.subtotal.to_string(),
        total: totals.total.to_string(),
        item_count: totals.items.iter().map(|item| u64::from(item.qty.get())).sum(),
    }
}
