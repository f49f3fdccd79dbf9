use crate::{inventory, recipes, sequences, users};
use async_trait::async_trait;
use kitchen_core::{error::Result, storage::KitchenStorage, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KitchenStorage for LocalStorageContext {
    async fn next_id(&self, kind: EntityKind) -> Result<String> {
        sequences::next(&self.pool, kind).await
    }

    // Users
    async fn create_user(&self, user: CreateUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        users::find_by_email(&self.pool, email).await
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    // Recipes
    async fn create_recipe(&self, recipe: CreateRecipe) -> Result<Recipe> {
        recipes::create(&self.pool, recipe).await
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        recipes::get_by_id(&self.pool, id).await
    }

    async fn list_recipes(&self, owner: Option<&UserId>) -> Result<Vec<Recipe>> {
        recipes::list(&self.pool, owner).await
    }

    async fn find_recipe_by_title(
        &self,
        chef: &str,
        title: &str,
        exclude: Option<&RecipeId>,
    ) -> Result<Option<Recipe>> {
        recipes::find_by_title(&self.pool, chef, title, exclude).await
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<Recipe> {
        recipes::update(&self.pool, recipe).await
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<bool> {
        recipes::delete(&self.pool, id).await
    }

    // Inventory
    async fn create_item(&self, item: CreateInventoryItem) -> Result<InventoryItem> {
        inventory::create(&self.pool, item).await
    }

    async fn get_item(&self, id: &InventoryId) -> Result<Option<InventoryItem>> {
        inventory::get_by_id(&self.pool, id).await
    }

    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        inventory::list(&self.pool).await
    }

    async fn update_item(&self, item: &InventoryItem) -> Result<InventoryItem> {
        inventory::update(&self.pool, item).await
    }

    async fn delete_item(&self, id: &InventoryId) -> Result<bool> {
        inventory::delete(&self.pool, id).await
    }

    // Stats
    async fn stats(&self) -> Result<Stats> {
        let (recipes, inventory, users) = tokio::try_join!(
            recipes::count(&self.pool),
            inventory::count(&self.pool),
            users::count(&self.pool),
        )?;

        Ok(Stats {
            recipes,
            inventory,
            users,
        })
    }
}
