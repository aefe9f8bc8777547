//! Cart store persistence across "page reloads" on real disk storage.

use boutique_cache::{FileStore, KvStore};
use boutique_commerce::prelude::*;

fn open_store(dir: &std::path::Path) -> CartStore<KvCartPersistence<FileStore>> {
    CartStore::open(KvCartPersistence::new(FileStore::open(dir).unwrap()))
}

#[test]
fn test_reload_restores_identical_cart() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = open_store(dir.path());
    store.add_item(
        CartLine::new(VariantId::new(11), 1)
            .with_sku("ROBE-S-NOIR")
            .with_title("Robe longue")
            .with_price("4500.00")
            .with_image("/media/robe.jpg"),
    );
    store.add_item(CartLine::new(VariantId::new(12), 3).with_price("abc"));
    store.add_item(CartLine::new(VariantId::new(11), 2).with_title("ignored"));
    let before = store.snapshot();
    drop(store);

    let reloaded = open_store(dir.path());
    assert_eq!(reloaded.cart(), &*before);
    assert_eq!(reloaded.total_items(), 6);
    assert_eq!(reloaded.total_price(), Money::new(1_350_000));
    assert_eq!(
        reloaded.items()[0].title.as_deref(),
        Some("Robe longue")
    );
}

#[test]
fn test_clear_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = open_store(dir.path());
    store.add_item(CartLine::new(VariantId::new(1), 2).with_price("10.00"));
    store.clear_cart();
    drop(store);

    let reloaded = open_store(dir.path());
    assert!(reloaded.cart().is_empty());
    assert_eq!(reloaded.total_price(), Money::zero());
}

#[test]
fn test_first_use_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());

    assert!(store.cart().is_empty());
    assert!(!store
        .persistence()
        .store()
        .exists(CART_STORAGE_KEY)
        .unwrap());
}

#[test]
fn test_stored_layout_is_plain_json() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = open_store(dir.path());
    store.add_item(CartLine::new(VariantId::new(5), 2).with_price("12.50"));

    let raw = std::fs::read_to_string(
        store.persistence().store().path_for(CART_STORAGE_KEY),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"items": [{"variant_id": 5, "quantity": 2, "price": "12.50"}]})
    );
}
