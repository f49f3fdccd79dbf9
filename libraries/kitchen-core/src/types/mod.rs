//! Domain types for Cloud Kitchen
mod ids;
mod input;
mod inventory;
mod recipe;
mod user;

pub use ids::{EntityKind, InventoryId, RecipeId, UserId, SEQUENCE_WIDTH};
pub use input::{
    deserialize_optional_date, parse_date, IngredientsInput, InstructionsInput, KeyedEntries,
};
pub use inventory::{CreateInventoryItem, InventoryItem, UpdateInventoryItem};
pub use recipe::{title_key, CreateRecipe, Recipe, UpdateRecipe};
pub use user::{CreateUser, Role, User};

use serde::{Deserialize, Serialize};

/// Collection sizes reported by `/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of recipes
    pub recipes: i64,
    /// Number of inventory items
    pub inventory: i64,
    /// Number of users
    pub users: i64,
}
