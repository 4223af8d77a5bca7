//! Cart commands.

use std::io::Write;

use endenture_core::{ProductId, Quantity};
use endenture_storefront::navigation::Location;
use endenture_storefront::state::{Command, Storefront};
use endenture_storefront::storage::KeyValueStore;
use endenture_storefront::views::CartView;

use super::CommandResult;
use crate::output;

/// Parse an `ID=QTY` argument. The quantity text is kept raw.
pub fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    let (id, qty) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got `{arg}`"))?;
    if id.trim().is_empty() {
        return Err(format!("missing product id in `{arg}`"));
    }
    Ok((id.trim().to_owned(), qty.to_owned()))
}

/// Add from the detail page, then follow its navigation.
pub fn add<S: KeyValueStore>(
    store: &mut Storefront<S>,
    id: &str,
    qty: &str,
    out: &mut impl Write,
) -> CommandResult {
    if store.catalog().lookup(id).is_none() {
        tracing::warn!(id, "Unknown product, cart unchanged");
    }

    let command = Command::AddFromDetail {
        id: ProductId::new(id),
        quantity: Quantity::parse_lenient(qty),
    };
    let effect = store.dispatch(command)?;

    match effect.navigate {
        Some(Location::Cart) => show(store, out),
        _ => output::badge(out, effect.badge).map_err(Into::into),
    }
}

pub fn remove<S: KeyValueStore>(
    store: &mut Storefront<S>,
    id: &str,
    out: &mut impl Write,
) -> CommandResult {
    let remove = store
        .cart_view()
        .items
        .into_iter()
        .find(|item| item.id.as_str() == id)
        .map(|item| item.remove);

    match remove {
        Some(command) => {
            store.dispatch(command)?;
        }
        None => tracing::info!(id, "Not in cart"),
    }
    show(store, out)
}

/// Apply every `ID=QTY` pair in one batched update.
pub fn update<S: KeyValueStore>(
    store: &mut Storefront<S>,
    quantities: Vec<(String, String)>,
    out: &mut impl Write,
) -> CommandResult {
    store.dispatch(CartView::update_command(quantities))?;
    show(store, out)
}

pub fn show<S: KeyValueStore>(store: &Storefront<S>, out: &mut impl Write) -> CommandResult {
    output::cart(out, &store.cart_view())?;
    Ok(())
}

pub fn count<S: KeyValueStore>(store: &Storefront<S>, out: &mut impl Write) -> CommandResult {
    output::badge(out, store.badge())?;
    Ok(())
}

pub fn clear<S: KeyValueStore>(store: &mut Storefront<S>, out: &mut impl Write) -> CommandResult {
    store.cart_mut().clear()?;
    show(store, out)
}
