//! Cart operations end to end over the file-backed store.

#![allow(clippy::unwrap_used)]

use endenture_core::{Price, ProductId};
use endenture_integration_tests::{TestShop, add};
use endenture_storefront::state::Command;
use endenture_storefront::views::CartView;

fn price(cents: i64) -> Price {
    Price::from_cents(cents).unwrap()
}

// ============================================================================
// Add
// ============================================================================

#[test]
fn test_jacket_and_two_backpacks_subtotal() {
    let shop = TestShop::new();
    let mut store = shop.open();

    store.dispatch(add("jacket", 1)).unwrap();
    store.dispatch(add("backpack", 2)).unwrap();

    let totals = store.totals();
    assert_eq!(totals.items.len(), 2);
    assert_eq!(totals.subtotal, price(99_700));
    assert_eq!(totals.total, totals.subtotal);
    assert_eq!(store.cart_view().subtotal, "$997.00");
}

#[test]
fn test_repeated_add_merges_into_one_line() {
    let shop = TestShop::new();
    let mut store = shop.open();

    store.dispatch(add("jacket", 1)).unwrap();
    store.dispatch(add("jacket", 3)).unwrap();

    let view = store.cart_view();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].quantity, 4);
    assert_eq!(view.items[0].line_total, "$1996.00");
}

#[test]
fn test_add_merge_law_for_every_product() {
    let shop = TestShop::new();
    let mut store = shop.open();

    let ids: Vec<ProductId> = store
        .catalog()
        .list_all()
        .iter()
        .map(|product| product.id.clone())
        .collect();

    for (n, id) in (1..).zip(&ids) {
        store.dispatch(add(id.as_str(), n)).unwrap();
        store.dispatch(add(id.as_str(), n + 1)).unwrap();
    }

    let totals = store.totals();
    assert_eq!(totals.items.len(), ids.len());
    for (n, item) in (1..).zip(&totals.items) {
        assert_eq!(item.qty.get(), 2 * n + 1);
    }
}

#[test]
fn test_add_unknown_product_leaves_cart_unchanged() {
    let shop = TestShop::new();
    let mut store = shop.open();
    store.dispatch(add("boots", 2)).unwrap();
    let before = shop.read_raw_cart();

    let effect = store.dispatch(add("kayak", 1)).unwrap();

    assert_eq!(effect.badge.count, 2);
    assert_eq!(shop.read_raw_cart(), before);
}

// ============================================================================
// Update & Remove
// ============================================================================

#[test]
fn test_update_clamps_to_one() {
    let shop = TestShop::new();
    let mut store = shop.open();
    store.dispatch(add("gloves", 3)).unwrap();

    for quantity in [0, -5] {
        store
            .dispatch(Command::UpdateQuantity {
                id: ProductId::new("gloves"),
                quantity,
            })
            .unwrap();
        assert_eq!(store.totals().items[0].qty.get(), 1);
    }
}

#[test]
fn test_update_unknown_id_is_noop() {
    let shop = TestShop::new();
    let mut store = shop.open();
    store.dispatch(add("gloves", 3)).unwrap();

    store
        .dispatch(Command::UpdateQuantity {
            id: ProductId::new("backpack"),
            quantity: 7,
        })
        .unwrap();

    let totals = store.totals();
    assert_eq!(totals.items.len(), 1);
    assert_eq!(totals.items[0].qty.get(), 3);
}

#[test]
fn test_batched_update_from_cart_page() {
    let shop = TestShop::new();
    let mut store = shop.open();
    store.dispatch(add("jacket", 1)).unwrap();
    store.dispatch(add("waterbottle", 1)).unwrap();

    let mut inputs = store.cart_view().current_quantities();
    inputs[0].1 = "2".to_string();
    inputs[1].1 = "not a number".to_string();
    store.dispatch(CartView::update_command(inputs)).unwrap();

    let view = store.cart_view();
    assert_eq!(view.items[0].quantity, 2);
    assert_eq!(view.items[1].quantity, 1);
    assert_eq!(view.subtotal, "$1037.00");
}

#[test]
fn test_remove_is_idempotent() {
    let shop = TestShop::new();
    let mut store = shop.open();
    store.dispatch(add("jacket", 1)).unwrap();
    store.dispatch(add("boots", 1)).unwrap();

    let remove = Command::Remove {
        id: ProductId::new("jacket"),
    };
    store.dispatch(remove.clone()).unwrap();
    let once = store.totals();
    store.dispatch(remove).unwrap();

    assert_eq!(store.totals(), once);
    assert_eq!(once.items.len(), 1);
    assert_eq!(once.items[0].id.as_str(), "boots");
}

// ============================================================================
// Totals
// ============================================================================

#[test]
fn test_empty_cart_totals_are_zero() {
    let shop = TestShop::new();
    let store = shop.open();

    let totals = store.totals();
    assert!(totals.items.is_empty());
    assert_eq!(totals.subtotal, Price::ZERO);
    assert_eq!(totals.total, Price::ZERO);
    assert!(store.cart_view().is_empty());
}

#[test]
fn test_subtotal_is_sum_of_line_totals() {
    let shop = TestShop::new();
    let mut store = shop.open();
    store.dispatch(add("hikingstick", 2)).unwrap();
    store.dispatch(add("gloves", 3)).unwrap();
    store.dispatch(add("waterbottle", 1)).unwrap();

    let totals = store.totals();
    let summed: Price = totals.items.iter().map(|item| item.line_total()).sum();
    assert_eq!(totals.subtotal, summed);
    assert_eq!(totals.subtotal, price(2 * 19_900 + 3 * 6_500 + 3_900));
    assert_eq!(store.badge().count, 6);
}

#[test]
fn test_clear_empties_cart() {
    let shop = TestShop::new();
    let mut store = shop.open();
    store.dispatch(add("jacket", 2)).unwrap();

    store.cart_mut().clear().unwrap();

    assert_eq!(store.badge().count, 0);
    assert_eq!(shop.read_raw_cart(), None);
}
