//! Human-readable ID allocation
//!
//! Each entity kind has one row in `id_sequences`. Allocation is a single
//! upsert that seeds the row from the highest existing ID of that kind, or
//! advances it past both its last value and that highest ID, and returns the
//! new value. SQLite serializes writers, so two concurrent creates can never
//! receive the same number, and numbers are never reused after a delete.

use kitchen_core::{EntityKind, KitchenError, Result};
use sqlx::SqlitePool;

macro_rules! upsert_sql {
    ($table:literal, $column:literal) => {
        concat!(
            "INSERT INTO id_sequences (entity, value) VALUES (?, ",
            "(SELECT COALESCE(MAX(CAST(SUBSTR(",
            $column,
            ", 3) AS INTEGER)), 0) + 1 FROM ",
            $table,
            ")) ON CONFLICT(entity) DO UPDATE SET value = MAX(value + 1, excluded.value) RETURNING value"
        )
    };
}

fn allocate_sql(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::User => upsert_sql!("users", "user_id"),
        EntityKind::Recipe => upsert_sql!("recipes", "recipe_id"),
        EntityKind::Inventory => upsert_sql!("inventory_items", "inventory_id"),
    }
}

/// Allocate the next sequence number for `kind`
pub async fn next_value(pool: &SqlitePool, kind: EntityKind) -> Result<u64> {
    let value: i64 = sqlx::query_scalar(allocate_sql(kind))
        .bind(kind.as_str())
        .fetch_one(pool)
        .await?;

    u64::try_from(value)
        .map_err(|_| KitchenError::storage(format!("Negative {kind} sequence value: {value}")))
}

/// Allocate the next human-readable ID for `kind`
pub async fn next(pool: &SqlitePool, kind: EntityKind) -> Result<String> {
    let value = next_value(pool, kind).await?;
    tracing::trace!(%kind, value, "allocated id");
    Ok(kind.format(value))
}

/// Last value handed out for `kind`, if any
pub async fn current(pool: &SqlitePool, kind: EntityKind) -> Result<Option<u64>> {
    let value: Option<i64> = sqlx::query_scalar("SELECT value FROM id_sequences WHERE entity = ?")
        .bind(kind.as_str())
        .fetch_optional(pool)
        .await?;

    Ok(value.and_then(|v| u64::try_from(v).ok()))
}
