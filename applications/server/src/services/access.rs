//! Actor resolution and recipe authorization
//!
//! Every request names its actor with a plain `userId`; there are no sessions.
//! Recipe operations additionally require the `chef` role, and changes to a
//! recipe require that the actor owns it. Inventory is a shared pantry and only
//! needs an existing actor.

use crate::error::{Result, ServerError};
use kitchen_core::{KitchenStorage, Recipe, RecipeId, User, UserId};

/// What a chef-only check is guarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    ViewRecipes,
    ManageRecipes,
}

/// Look up the acting user; a missing or unknown ID is "User not found"
pub async fn resolve_actor(storage: &dyn KitchenStorage, user_id: Option<&UserId>) -> Result<User> {
    let Some(user_id) = user_id else {
        return Err(ServerError::NotFound("User not found".to_string()));
    };

    storage
        .get_user(user_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))
}

pub fn require_chef(actor: &User, purpose: Purpose) -> Result<()> {
    if actor.is_chef() {
        return Ok(());
    }

    let message = match purpose {
        Purpose::ViewRecipes => "Only chefs can view recipes",
        Purpose::ManageRecipes => "Only chefs can manage recipes",
    };
    Err(ServerError::Forbidden(message.to_string()))
}

pub fn require_owner(recipe: &Recipe, actor_id: &UserId) -> Result<()> {
    if recipe.owner_id == *actor_id {
        Ok(())
    } else {
        Err(ServerError::Forbidden("You do not own this recipe".to_string()))
    }
}

/// Reject a `(chef, title)` pair already used by another recipe, ignoring case
pub async fn ensure_unique_title(
    storage: &dyn KitchenStorage,
    chef: &str,
    title: &str,
    exclude: Option<&RecipeId>,
) -> Result<()> {
    match storage.find_recipe_by_title(chef, title, exclude).await? {
        Some(existing) => {
            tracing::debug!(recipe_id = %existing.recipe_id, "duplicate recipe title");
            Err(kitchen_core::KitchenError::DuplicateTitle.into())
        }
        None => Ok(()),
    }
}

/// Load a recipe the actor is allowed to change
pub async fn owned_recipe(
    storage: &dyn KitchenStorage,
    recipe_id: Option<&RecipeId>,
    actor: &User,
) -> Result<Recipe> {
    let recipe = match recipe_id {
        Some(id) => storage.get_recipe(id).await?,
        None => None,
    }
    .ok_or_else(|| ServerError::NotFound("Recipe not found".to_string()))?;

    require_owner(&recipe, &actor.user_id)?;
    Ok(recipe)
}
