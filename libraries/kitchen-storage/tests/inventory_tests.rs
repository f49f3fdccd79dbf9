//! Integration tests for the inventory vertical slice

mod test_helpers;

use chrono::{TimeZone, Utc};
use kitchen_core::{types::*, KitchenError};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_item() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let user = create_test_user(pool, "user@example.com", Role::User).await;

    let mut input = item_input(&user.user_id, "Flour");
    input.expiration_date = Some(Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap());

    let item = kitchen_storage::inventory::create(pool, input)
        .await
        .expect("Failed to create item");

    assert_eq!(item.inventory_id.as_str(), "I-00001");
    assert_eq!(item.added_by, user.user_id);
    assert_eq!(item.user_id, user.user_id);

    let fetched = kitchen_storage::inventory::get_by_id(pool, &item.inventory_id)
        .await
        .expect("Query failed")
        .expect("Item not found");

    assert_eq!(fetched, item);
    assert_eq!(fetched.quantity, 2.0);
    assert_eq!(fetched.cost, Some(4.25));
    assert_eq!(
        fetched.expiration_date,
        Some(Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap())
    );
    assert!(fetched.purchase_date.is_none());
}

#[tokio::test]
async fn test_list_items_newest_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let user = create_test_user(pool, "user@example.com", Role::User).await;

    for name in ["Flour", "Sugar", "Salt"] {
        kitchen_storage::inventory::create(pool, item_input(&user.user_id, name))
            .await
            .expect("Failed to create item");
    }

    let items = kitchen_storage::inventory::list(pool)
        .await
        .expect("Query failed");
    let names: Vec<_> = items.iter().map(|i| i.ingredient_name.as_str()).collect();
    assert_eq!(names, vec!["Salt", "Sugar", "Flour"]);
}

#[tokio::test]
async fn test_update_item_keeps_identity() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let user = create_test_user(pool, "user@example.com", Role::User).await;

    let mut item = kitchen_storage::inventory::create(pool, item_input(&user.user_id, "Milk"))
        .await
        .expect("Failed to create item");
    let original = item.clone();

    item.apply(UpdateInventoryItem {
        quantity: Some(0.5),
        location: Some("Fridge".to_string()),
        ..UpdateInventoryItem::default()
    });

    let updated = kitchen_storage::inventory::update(pool, &item)
        .await
        .expect("Failed to update item");

    assert_eq!(updated.quantity, 0.5);
    assert_eq!(updated.location.as_deref(), Some("Fridge"));
    assert_eq!(updated.inventory_id, original.inventory_id);
    assert_eq!(updated.added_by, original.added_by);
    assert_eq!(updated.created_date, original.created_date);
    assert_eq!(updated.unit, "kg");
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let user = create_test_user(pool, "user@example.com", Role::User).await;

    let item = kitchen_storage::inventory::create(pool, item_input(&user.user_id, "Milk"))
        .await
        .expect("Failed to create item");
    kitchen_storage::inventory::delete(pool, &item.inventory_id)
        .await
        .expect("Delete failed");

    let err = kitchen_storage::inventory::update(pool, &item)
        .await
        .expect_err("Update of deleted item should fail");
    assert!(matches!(err, KitchenError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_and_count() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let user = create_test_user(pool, "user@example.com", Role::User).await;

    let item = kitchen_storage::inventory::create(pool, item_input(&user.user_id, "Eggs"))
        .await
        .expect("Failed to create item");
    kitchen_storage::inventory::create(pool, item_input(&user.user_id, "Butter"))
        .await
        .expect("Failed to create item");

    assert_eq!(kitchen_storage::inventory::count(pool).await.unwrap(), 2);
    assert!(kitchen_storage::inventory::delete(pool, &item.inventory_id)
        .await
        .expect("Delete failed"));
    assert!(!kitchen_storage::inventory::delete(pool, &item.inventory_id)
        .await
        .expect("Delete failed"));
    assert_eq!(kitchen_storage::inventory::count(pool).await.unwrap(), 1);
}
