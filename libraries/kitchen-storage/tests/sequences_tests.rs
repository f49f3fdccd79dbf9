//! Integration tests for human-readable ID allocation

mod test_helpers;

use kitchen_core::{types::*, KitchenStorage};
use kitchen_storage::LocalStorageContext;
use std::collections::HashSet;
use test_helpers::*;

#[tokio::test]
async fn test_first_ids_start_at_one() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    for kind in EntityKind::ALL {
        let id = kitchen_storage::sequences::next(pool, kind)
            .await
            .expect("Allocation failed");
        assert_eq!(id, kind.seed());
    }
}

#[tokio::test]
async fn test_ids_strictly_increase() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut last = 0;
    for _ in 0..10 {
        let value = kitchen_storage::sequences::next_value(pool, EntityKind::Recipe)
            .await
            .expect("Allocation failed");
        assert!(value > last);
        last = value;
    }

    let current = kitchen_storage::sequences::current(pool, EntityKind::Recipe)
        .await
        .expect("Query failed");
    assert_eq!(current, Some(10));
}

#[tokio::test]
async fn test_kinds_are_independent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    kitchen_storage::sequences::next(pool, EntityKind::User).await.unwrap();
    kitchen_storage::sequences::next(pool, EntityKind::User).await.unwrap();

    let recipe = kitchen_storage::sequences::next(pool, EntityKind::Recipe)
        .await
        .unwrap();
    assert_eq!(recipe, "R-00001");
    assert!(kitchen_storage::sequences::current(pool, EntityKind::Inventory)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let user = create_test_user(pool, "user@example.com", Role::User).await;

    let first = kitchen_storage::inventory::create(pool, item_input(&user.user_id, "Flour"))
        .await
        .unwrap();
    let second = kitchen_storage::inventory::create(pool, item_input(&user.user_id, "Sugar"))
        .await
        .unwrap();
    kitchen_storage::inventory::delete(pool, &second.inventory_id)
        .await
        .unwrap();
    kitchen_storage::inventory::delete(pool, &first.inventory_id)
        .await
        .unwrap();

    let third = kitchen_storage::inventory::create(pool, item_input(&user.user_id, "Salt"))
        .await
        .unwrap();
    assert_eq!(third.inventory_id.as_str(), "I-00003");
}

#[tokio::test]
async fn test_counter_skips_past_existing_rows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    // Rows imported without going through the allocator
    sqlx::query(
        "INSERT INTO users (user_id, fullname, email, password, role, created_at)
         VALUES ('U-00041', 'Imported', 'imported@example.com', 'x', 'user', 0)",
    )
    .execute(pool)
    .await
    .unwrap();

    let id = kitchen_storage::sequences::next(pool, EntityKind::User)
        .await
        .unwrap();
    assert_eq!(id, "U-00042");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_allocations_are_unique() {
    let test_db = TestDb::new().await;
    let storage = LocalStorageContext::new(test_db.pool().clone());

    let mut handles = Vec::new();
    for _ in 0..40 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage.next_id(EntityKind::User).await
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap().expect("Allocation failed");
        assert!(seen.insert(id), "duplicate id allocated");
    }

    assert_eq!(seen.len(), 40);
    assert!(seen.contains("U-00001"));
    assert!(seen.contains("U-00040"));
}

#[tokio::test]
async fn test_stats_counts_every_collection() {
    let test_db = TestDb::new().await;
    let storage = LocalStorageContext::new(test_db.pool().clone());

    let chef = create_test_user(test_db.pool(), "chef@example.com", Role::Chef).await;
    create_test_user(test_db.pool(), "user@example.com", Role::User).await;
    storage
        .create_recipe(recipe_input(&chef.user_id, "Alice", "Soup"))
        .await
        .unwrap();
    storage
        .create_item(item_input(&chef.user_id, "Flour"))
        .await
        .unwrap();

    let stats = storage.stats().await.unwrap();
    assert_eq!(
        stats,
        Stats {
            recipes: 1,
            inventory: 1,
            users: 2
        }
    );
}
