//! Inventory queries

use crate::{sequences, time};
use kitchen_core::{
    error::{KitchenError, Result},
    types::{CreateInventoryItem, EntityKind, InventoryId, InventoryItem},
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const COLUMNS: &str = "inventory_id, user_id, added_by, ingredient_name, quantity, unit, category,
    purchase_date, expiration_date, location, cost, created_date";

fn from_row(row: &SqliteRow) -> Result<InventoryItem> {
    Ok(InventoryItem {
        inventory_id: row.try_get("inventory_id")?,
        user_id: row.try_get("user_id")?,
        added_by: row.try_get("added_by")?,
        ingredient_name: row.try_get("ingredient_name")?,
        quantity: row.try_get("quantity")?,
        unit: row.try_get("unit")?,
        category: row.try_get("category")?,
        purchase_date: time::from_optional_millis(row.try_get("purchase_date")?)?,
        expiration_date: time::from_optional_millis(row.try_get("expiration_date")?)?,
        location: row.try_get("location")?,
        cost: row.try_get("cost")?,
        created_date: time::from_millis(row.try_get("created_date")?)?,
    })
}

/// Create an inventory item under a freshly allocated `I-#####` ID
pub async fn create(pool: &SqlitePool, item: CreateInventoryItem) -> Result<InventoryItem> {
    let inventory_id = InventoryId::new(sequences::next(pool, EntityKind::Inventory).await?);
    let created_date = time::now();

    sqlx::query(
        r#"
        INSERT INTO inventory_items (
            inventory_id, user_id, added_by, ingredient_name, quantity, unit,
            category, purchase_date, expiration_date, location, cost, created_date
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&inventory_id)
    .bind(&item.added_by)
    .bind(&item.added_by)
    .bind(&item.ingredient_name)
    .bind(item.quantity)
    .bind(&item.unit)
    .bind(&item.category)
    .bind(item.purchase_date.map(|d| d.timestamp_millis()))
    .bind(item.expiration_date.map(|d| d.timestamp_millis()))
    .bind(&item.location)
    .bind(item.cost)
    .bind(created_date.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(InventoryItem {
        inventory_id,
        user_id: item.added_by.clone(),
        added_by: item.added_by,
        ingredient_name: item.ingredient_name,
        quantity: item.quantity,
        unit: item.unit,
        category: item.category,
        purchase_date: item
            .purchase_date
            .map(|d| d.timestamp_millis())
            .map(time::from_millis)
            .transpose()?,
        expiration_date: item
            .expiration_date
            .map(|d| d.timestamp_millis())
            .map(time::from_millis)
            .transpose()?,
        location: item.location,
        cost: item.cost,
        created_date,
    })
}

/// Get an inventory item by human-readable ID
pub async fn get_by_id(pool: &SqlitePool, id: &InventoryId) -> Result<Option<InventoryItem>> {
    let row = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM inventory_items WHERE inventory_id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// List every item newest first
pub async fn list(pool: &SqlitePool) -> Result<Vec<InventoryItem>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM inventory_items ORDER BY created_date DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Persist the mutable fields of `item`
pub async fn update(pool: &SqlitePool, item: &InventoryItem) -> Result<InventoryItem> {
    let result = sqlx::query(
        r#"
        UPDATE inventory_items
        SET ingredient_name = ?, quantity = ?, unit = ?, category = ?,
            purchase_date = ?, expiration_date = ?, location = ?, cost = ?
        WHERE inventory_id = ?
        "#,
    )
    .bind(&item.ingredient_name)
    .bind(item.quantity)
    .bind(&item.unit)
    .bind(&item.category)
    .bind(item.purchase_date.map(|d| d.timestamp_millis()))
    .bind(item.expiration_date.map(|d| d.timestamp_millis()))
    .bind(&item.location)
    .bind(item.cost)
    .bind(&item.inventory_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(KitchenError::not_found(
            "Inventory item",
            item.inventory_id.as_str(),
        ));
    }

    get_by_id(pool, &item.inventory_id)
        .await?
        .ok_or_else(|| KitchenError::not_found("Inventory item", item.inventory_id.as_str()))
}

/// Delete an inventory item; returns whether it existed
pub async fn delete(pool: &SqlitePool, id: &InventoryId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM inventory_items WHERE inventory_id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Number of inventory items
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_items")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
