//! Inventory domain types
//!
//! Inventory is a shared pantry: any existing account may read, change or
//! remove any item. `added_by` is recorded for display only and is never used
//! to restrict access.
use crate::types::{InventoryId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stocked ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Human-readable ID (`I-#####`)
    pub inventory_id: InventoryId,

    /// Account that created the item
    pub user_id: UserId,

    /// Same as `user_id`
    pub added_by: UserId,

    /// Ingredient name
    pub ingredient_name: String,

    /// Amount on hand
    pub quantity: f64,

    /// Unit of `quantity` (e.g. "kg")
    pub unit: String,

    /// e.g. "Dairy"
    pub category: Option<String>,

    /// When it was bought
    pub purchase_date: Option<DateTime<Utc>>,

    /// When it expires
    pub expiration_date: Option<DateTime<Utc>>,

    /// Storage location (e.g. "Fridge")
    pub location: Option<String>,

    /// Purchase cost
    pub cost: Option<f64>,

    /// Creation timestamp
    pub created_date: DateTime<Utc>,
}

impl InventoryItem {
    /// Apply a partial update; `None` fields are left untouched
    pub fn apply(&mut self, update: UpdateInventoryItem) {
        if let Some(name) = update.ingredient_name {
            self.ingredient_name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if update.category.is_some() {
            self.category = update.category;
        }
        if update.purchase_date.is_some() {
            self.purchase_date = update.purchase_date;
        }
        if update.expiration_date.is_some() {
            self.expiration_date = update.expiration_date;
        }
        if update.location.is_some() {
            self.location = update.location;
        }
        if update.cost.is_some() {
            self.cost = update.cost;
        }
    }
}

/// Data for creating an inventory item
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInventoryItem {
    /// Creating account
    pub added_by: UserId,
    /// Ingredient name
    pub ingredient_name: String,
    /// Amount on hand
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
    /// Category label
    pub category: Option<String>,
    /// Purchase date
    pub purchase_date: Option<DateTime<Utc>>,
    /// Expiration date
    pub expiration_date: Option<DateTime<Utc>>,
    /// Storage location
    pub location: Option<String>,
    /// Purchase cost
    pub cost: Option<f64>,
}

/// Partial inventory update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateInventoryItem {
    /// New ingredient name
    pub ingredient_name: Option<String>,
    /// New quantity
    pub quantity: Option<f64>,
    /// New unit
    pub unit: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New purchase date
    pub purchase_date: Option<DateTime<Utc>>,
    /// New expiration date
    pub expiration_date: Option<DateTime<Utc>>,
    /// New location
    pub location: Option<String>,
    /// New cost
    pub cost: Option<f64>,
}
