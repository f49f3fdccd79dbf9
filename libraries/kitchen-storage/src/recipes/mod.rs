//! Recipe queries
//!
//! Ingredient and instruction lists are stored as JSON arrays. The lowercased
//! `(chef, title)` pair is kept in `chef_key`/`title_key` under a unique index.

use crate::{sequences, time};
use kitchen_core::{
    error::{KitchenError, Result},
    types::{title_key, CreateRecipe, EntityKind, Recipe, RecipeId, UserId},
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const COLUMNS: &str = "recipe_id, user_id, owner_id, title, chef, ingredients, instructions,
    meal_type, cuisine_type, prep_time, difficulty, servings, created_date";

fn from_row(row: &SqliteRow) -> Result<Recipe> {
    let ingredients: String = row.try_get("ingredients")?;
    let instructions: String = row.try_get("instructions")?;

    Ok(Recipe {
        recipe_id: row.try_get("recipe_id")?,
        user_id: row.try_get("user_id")?,
        owner_id: row.try_get("owner_id")?,
        title: row.try_get("title")?,
        chef: row.try_get("chef")?,
        ingredients: serde_json::from_str(&ingredients)?,
        instructions: serde_json::from_str(&instructions)?,
        meal_type: row.try_get("meal_type")?,
        cuisine_type: row.try_get("cuisine_type")?,
        prep_time: row.try_get("prep_time")?,
        difficulty: row.try_get("difficulty")?,
        servings: row.try_get("servings")?,
        created_date: time::from_millis(row.try_get("created_date")?)?,
    })
}

/// Unique-index hits on the title pair are reported as duplicate titles
fn map_write_error(err: sqlx::Error) -> KitchenError {
    match KitchenError::from(err) {
        KitchenError::Conflict { field } if field == "titleKey" || field == "chefKey" => {
            KitchenError::DuplicateTitle
        }
        other => other,
    }
}

/// Create a recipe under a freshly allocated `R-#####` ID
pub async fn create(pool: &SqlitePool, recipe: CreateRecipe) -> Result<Recipe> {
    let recipe_id = RecipeId::new(sequences::next(pool, EntityKind::Recipe).await?);
    let created_date = time::now();
    let (chef_key, title_key) = title_key(&recipe.chef, &recipe.title);

    sqlx::query(
        r#"
        INSERT INTO recipes (
            recipe_id, user_id, owner_id, title, chef, chef_key, title_key,
            ingredients, instructions, meal_type, cuisine_type, prep_time,
            difficulty, servings, created_date
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&recipe_id)
    .bind(&recipe.owner_id)
    .bind(&recipe.owner_id)
    .bind(&recipe.title)
    .bind(&recipe.chef)
    .bind(chef_key)
    .bind(title_key)
    .bind(serde_json::to_string(&recipe.ingredients)?)
    .bind(serde_json::to_string(&recipe.instructions)?)
    .bind(&recipe.meal_type)
    .bind(&recipe.cuisine_type)
    .bind(recipe.prep_time)
    .bind(&recipe.difficulty)
    .bind(recipe.servings)
    .bind(created_date.timestamp_millis())
    .execute(pool)
    .await
    .map_err(map_write_error)?;

    Ok(Recipe {
        recipe_id,
        user_id: recipe.owner_id.clone(),
        owner_id: recipe.owner_id,
        title: recipe.title,
        chef: recipe.chef,
        ingredients: recipe.ingredients,
        instructions: recipe.instructions,
        meal_type: recipe.meal_type,
        cuisine_type: recipe.cuisine_type,
        prep_time: recipe.prep_time,
        difficulty: recipe.difficulty,
        servings: recipe.servings,
        created_date,
    })
}

/// Get a recipe by human-readable ID
pub async fn get_by_id(pool: &SqlitePool, id: &RecipeId) -> Result<Option<Recipe>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM recipes WHERE recipe_id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// List recipes newest first, optionally for a single owner
pub async fn list(pool: &SqlitePool, owner: Option<&UserId>) -> Result<Vec<Recipe>> {
    let rows = match owner {
        Some(owner_id) => {
            sqlx::query(&format!(
                "SELECT {COLUMNS} FROM recipes WHERE owner_id = ?
                 ORDER BY created_date DESC, id DESC"
            ))
            .bind(owner_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query(&format!(
                "SELECT {COLUMNS} FROM recipes ORDER BY created_date DESC, id DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };

    rows.iter().map(from_row).collect()
}

/// Find a recipe with the same `(chef, title)` ignoring case
///
/// `exclude` skips the recipe being edited.
pub async fn find_by_title(
    pool: &SqlitePool,
    chef: &str,
    title: &str,
    exclude: Option<&RecipeId>,
) -> Result<Option<Recipe>> {
    let (chef_key, title_key) = title_key(chef, title);
    let exclude = exclude.map(RecipeId::as_str);

    let row = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM recipes
         WHERE chef_key = ? AND title_key = ? AND (? IS NULL OR recipe_id <> ?)
         LIMIT 1"
    ))
    .bind(chef_key)
    .bind(title_key)
    .bind(exclude)
    .bind(exclude)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Persist the mutable fields of `recipe`
///
/// Returns `NotFound` when the recipe no longer exists.
pub async fn update(pool: &SqlitePool, recipe: &Recipe) -> Result<Recipe> {
    let (chef_key, title_key) = recipe.title_key();

    let result = sqlx::query(
        r#"
        UPDATE recipes
        SET title = ?, chef = ?, chef_key = ?, title_key = ?,
            ingredients = ?, instructions = ?, meal_type = ?, cuisine_type = ?,
            prep_time = ?, difficulty = ?, servings = ?
        WHERE recipe_id = ?
        "#,
    )
    .bind(&recipe.title)
    .bind(&recipe.chef)
    .bind(chef_key)
    .bind(title_key)
    .bind(serde_json::to_string(&recipe.ingredients)?)
    .bind(serde_json::to_string(&recipe.instructions)?)
    .bind(&recipe.meal_type)
    .bind(&recipe.cuisine_type)
    .bind(recipe.prep_time)
    .bind(&recipe.difficulty)
    .bind(recipe.servings)
    .bind(&recipe.recipe_id)
    .execute(pool)
    .await
    .map_err(map_write_error)?;

    if result.rows_affected() == 0 {
        return Err(KitchenError::not_found("Recipe", recipe.recipe_id.as_str()));
    }

    Ok(recipe.clone())
}

/// Delete a recipe; returns whether it existed
pub async fn delete(pool: &SqlitePool, id: &RecipeId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM recipes WHERE recipe_id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Number of recipes
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
