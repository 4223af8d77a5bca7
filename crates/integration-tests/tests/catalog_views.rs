//! Grid ordering, detail fallback, and navigation through the rendered views.

#![allow(clippy::unwrap_used)]

use endenture_core::SortMode;
use endenture_integration_tests::TestShop;
use endenture_storefront::navigation::Location;
use endenture_storefront::state::Command;

fn grid_ids(shop: &TestShop, mode: SortMode) -> Vec<String> {
    let mut store = shop.open();
    store.dispatch(Command::SetSortMode(mode)).unwrap();
    store.grid().cards.into_iter().map(|card| card.id).collect()
}

#[test]
fn test_every_product_looks_up_by_id() {
    let shop = TestShop::new();
    let store = shop.open();
    for product in store.catalog().list_all() {
        let found = store.catalog().lookup(product.id.as_str()).unwrap();
        assert_eq!(found, product);
    }
}

#[test]
fn test_price_desc_order() {
    let shop = TestShop::new();
    assert_eq!(
        grid_ids(&shop, SortMode::PriceDesc),
        ["jacket", "backpack", "hikingstick", "boots", "gloves", "waterbottle"]
    );
}

#[test]
fn test_price_asc_order() {
    let shop = TestShop::new();
    assert_eq!(
        grid_ids(&shop, SortMode::PriceAsc),
        ["waterbottle", "gloves", "boots", "hikingstick", "backpack", "jacket"]
    );
}

#[test]
fn test_rating_desc_keeps_catalog_order_for_ties() {
    let shop = TestShop::new();
    assert_eq!(
        grid_ids(&shop, SortMode::RatingDesc),
        ["backpack", "hikingstick", "boots", "gloves", "jacket", "waterbottle"]
    );
}

#[test]
fn test_card_link_opens_matching_detail() {
    let shop = TestShop::new();
    let store = shop.open();

    for card in store.grid().cards {
        let Location::ProductDetail { id, image } = Location::parse(&card.href).unwrap() else {
            panic!("card links to another page: {}", card.href);
        };
        let detail = store.detail(id.as_ref().map(|id| id.as_str()), image.as_deref());
        let product = detail.product().unwrap();
        assert_eq!(product.id.as_str(), card.id);
        assert_eq!(product.hero, card.image);
    }
}

#[test]
fn test_detail_falls_back_to_default_product() {
    let shop = TestShop::new();
    let store = shop.open();

    for requested in [None, Some("kayak")] {
        let detail = store.detail(requested, None);
        assert_eq!(detail.product().unwrap().id.as_str(), "jacket");
    }
}

#[test]
fn test_detail_add_then_cart() {
    let shop = TestShop::new();
    let mut store = shop.open();

    let detail = store.detail(Some("boots"), None);
    let command = detail.product().unwrap().add_command("3");
    let effect = store.dispatch(command).unwrap();

    assert_eq!(effect.navigate, Some(Location::Cart));
    let view = store.cart_view();
    assert_eq!(view.items[0].line_total, "$447.00");
    assert_eq!(effect.badge.count, 3);
}
