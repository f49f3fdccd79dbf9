//! Storage trait for the kitchen collections

use crate::error::Result;
use crate::types::{
    CreateInventoryItem, CreateRecipe, CreateUser, EntityKind, InventoryId, InventoryItem, Recipe,
    RecipeId, Stats, User, UserId,
};
use async_trait::async_trait;

/// Storage context providing access to users, recipes and inventory
///
/// Every create operation allocates the record's human-readable ID itself, so
/// callers never pick IDs.
#[async_trait]
pub trait KitchenStorage: Send + Sync {
    // ========================================================================
    // IDs
    // ========================================================================

    /// Allocate the next human-readable ID for `kind`
    async fn next_id(&self, kind: EntityKind) -> Result<String>;

    // ========================================================================
    // Users
    // ========================================================================

    /// Register a user
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Get user by human-readable ID
    async fn get_user(&self, id: &UserId) -> Result<Option<User>>;

    /// Find user by exact email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Get all users in registration order
    async fn get_all_users(&self) -> Result<Vec<User>>;

    // ========================================================================
    // Recipes
    // ========================================================================

    /// Create a recipe owned by `recipe.owner_id`
    async fn create_recipe(&self, recipe: CreateRecipe) -> Result<Recipe>;

    /// Get recipe by human-readable ID
    async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>>;

    /// List recipes newest first, optionally restricted to one owner
    async fn list_recipes(&self, owner: Option<&UserId>) -> Result<Vec<Recipe>>;

    /// Find a recipe whose `(chef, title)` matches case-insensitively
    async fn find_recipe_by_title(
        &self,
        chef: &str,
        title: &str,
        exclude: Option<&RecipeId>,
    ) -> Result<Option<Recipe>>;

    /// Persist all mutable fields of `recipe`
    async fn update_recipe(&self, recipe: &Recipe) -> Result<Recipe>;

    /// Delete a recipe; returns whether a record was removed
    async fn delete_recipe(&self, id: &RecipeId) -> Result<bool>;

    // ========================================================================
    // Inventory
    // ========================================================================

    /// Create an inventory item
    async fn create_item(&self, item: CreateInventoryItem) -> Result<InventoryItem>;

    /// Get inventory item by human-readable ID
    async fn get_item(&self, id: &InventoryId) -> Result<Option<InventoryItem>>;

    /// List all inventory items newest first
    async fn list_items(&self) -> Result<Vec<InventoryItem>>;

    /// Persist all mutable fields of `item`
    async fn update_item(&self, item: &InventoryItem) -> Result<InventoryItem>;

    /// Delete an inventory item; returns whether a record was removed
    async fn delete_item(&self, id: &InventoryId) -> Result<bool>;

    // ========================================================================
    // Stats
    // ========================================================================

    /// Count records in every collection
    async fn stats(&self) -> Result<Stats>;
}
