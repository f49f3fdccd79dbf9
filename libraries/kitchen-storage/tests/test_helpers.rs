//! Test helpers and fixtures for storage integration tests
//!
//! Databases are real SQLite files in a temp dir so migrations, constraints
//! and indexes behave as they do in production.
#![allow(dead_code)]

use kitchen_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = kitchen_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        kitchen_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: register a user with the given role
pub async fn create_test_user(pool: &SqlitePool, email: &str, role: Role) -> User {
    kitchen_storage::users::create(
        pool,
        CreateUser {
            fullname: format!("Test {email}"),
            email: email.to_string(),
            password: "secret".to_string(),
            role,
            phone: None,
        },
    )
    .await
    .expect("Failed to create test user")
}

/// Test fixture: a minimal recipe owned by `owner`
pub fn recipe_input(owner: &UserId, chef: &str, title: &str) -> CreateRecipe {
    CreateRecipe {
        owner_id: owner.clone(),
        title: title.to_string(),
        chef: chef.to_string(),
        ingredients: vec!["1 cup flour".to_string(), "2 eggs".to_string()],
        instructions: vec!["Mix".to_string(), "Bake".to_string()],
        meal_type: Some("Breakfast".to_string()),
        cuisine_type: None,
        prep_time: Some(20),
        difficulty: Some("Easy".to_string()),
        servings: Some(4),
    }
}

/// Test fixture: a minimal inventory item added by `user`
pub fn item_input(user: &UserId, name: &str) -> CreateInventoryItem {
    CreateInventoryItem {
        added_by: user.clone(),
        ingredient_name: name.to_string(),
        quantity: 2.0,
        unit: "kg".to_string(),
        category: Some("Baking".to_string()),
        purchase_date: None,
        expiration_date: None,
        location: Some("Pantry".to_string()),
        cost: Some(4.25),
    }
}
