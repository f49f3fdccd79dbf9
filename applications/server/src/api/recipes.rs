/// Recipe API routes
///
/// Every route requires a chef actor; edits and deletes also require that the
/// actor owns the recipe.
use crate::{
    error::{Result, ServerError},
    extract::{ApiJson, ApiPath, ApiQuery},
    services::access::{self, Purpose},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use kitchen_core::{
    CreateRecipe, IngredientsInput, InstructionsInput, KitchenStorage, Recipe, RecipeId,
    UpdateRecipe, UserId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecipesQuery {
    pub user_id: Option<UserId>,
    pub owner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorQuery {
    pub user_id: Option<UserId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRecipeRequest {
    pub user_id: Option<UserId>,
    pub title: Option<String>,
    pub chef: Option<String>,
    pub ingredients: Option<IngredientsInput>,
    pub instructions: Option<InstructionsInput>,
    pub meal_type: Option<String>,
    pub cuisine_type: Option<String>,
    pub prep_time: Option<i64>,
    pub difficulty: Option<String>,
    pub servings: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditRecipeRequest {
    pub user_id: Option<UserId>,
    pub recipe_id: Option<RecipeId>,
    pub title: Option<String>,
    pub chef: Option<String>,
    pub ingredients: Option<IngredientsInput>,
    pub instructions: Option<InstructionsInput>,
    pub meal_type: Option<String>,
    pub cuisine_type: Option<String>,
    pub prep_time: Option<i64>,
    pub difficulty: Option<String>,
    pub servings: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub ok: bool,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub ok: bool,
    pub recipe: Recipe,
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServerError::BadRequest(format!("{field} is required"))),
    }
}

fn non_negative(value: Option<i64>, field: &str) -> Result<Option<i64>> {
    match value {
        Some(v) if v < 0 => Err(ServerError::BadRequest(format!(
            "{field} cannot be negative"
        ))),
        other => Ok(other),
    }
}

/// GET /view-recipes?userId=&ownerId=
/// List recipes newest first, optionally for one owner
pub async fn view_recipes(
    State(app_state): State<AppState>,
    ApiQuery(query): ApiQuery<ViewRecipesQuery>,
) -> Result<Json<RecipeListResponse>> {
    let actor = access::resolve_actor(&*app_state.db, query.user_id.as_ref()).await?;
    access::require_chef(&actor, Purpose::ViewRecipes)?;

    let owner = query
        .owner_id
        .filter(|id| !id.trim().is_empty())
        .map(UserId::new);
    let recipes = app_state.db.list_recipes(owner.as_ref()).await?;

    Ok(Json(RecipeListResponse { ok: true, recipes }))
}

/// POST /add-recipe
/// Create a recipe owned by the acting chef
pub async fn add_recipe(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<AddRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>)> {
    let actor = access::resolve_actor(&*app_state.db, req.user_id.as_ref()).await?;
    access::require_chef(&actor, Purpose::ManageRecipes)?;

    let title = required(req.title, "Title")?;
    let chef = required(req.chef, "Chef")?;
    access::ensure_unique_title(&*app_state.db, &chef, &title, None).await?;

    let recipe = app_state
        .db
        .create_recipe(CreateRecipe {
            owner_id: actor.user_id,
            title,
            chef,
            ingredients: req
                .ingredients
                .map(IngredientsInput::into_list)
                .unwrap_or_default(),
            instructions: req
                .instructions
                .map(InstructionsInput::into_steps)
                .unwrap_or_default(),
            meal_type: req.meal_type,
            cuisine_type: req.cuisine_type,
            prep_time: non_negative(req.prep_time, "Prep time")?,
            difficulty: req.difficulty,
            servings: non_negative(req.servings, "Servings")?,
        })
        .await?;

    tracing::info!(recipe_id = %recipe.recipe_id, owner_id = %recipe.owner_id, "recipe created");

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse { ok: true, recipe }),
    ))
}

/// PUT /edit-recipe
/// Partially update a recipe the actor owns
pub async fn edit_recipe(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<EditRecipeRequest>,
) -> Result<Json<RecipeResponse>> {
    let actor = access::resolve_actor(&*app_state.db, req.user_id.as_ref()).await?;
    access::require_chef(&actor, Purpose::ManageRecipes)?;

    let mut recipe = access::owned_recipe(&*app_state.db, req.recipe_id.as_ref(), &actor).await?;

    let update = UpdateRecipe {
        title: req.title.map(|t| required(Some(t), "Title")).transpose()?,
        chef: req.chef.map(|c| required(Some(c), "Chef")).transpose()?,
        ingredients: req.ingredients.map(IngredientsInput::into_list),
        instructions: req.instructions.map(InstructionsInput::into_steps),
        meal_type: req.meal_type,
        cuisine_type: req.cuisine_type,
        prep_time: non_negative(req.prep_time, "Prep time")?,
        difficulty: req.difficulty,
        servings: non_negative(req.servings, "Servings")?,
    };

    if update.renames() {
        let chef = update.chef.as_deref().unwrap_or(&recipe.chef);
        let title = update.title.as_deref().unwrap_or(&recipe.title);
        access::ensure_unique_title(&*app_state.db, chef, title, Some(&recipe.recipe_id)).await?;
    }

    recipe.apply(update);
    let recipe = app_state.db.update_recipe(&recipe).await?;

    tracing::info!(recipe_id = %recipe.recipe_id, "recipe updated");

    Ok(Json(RecipeResponse { ok: true, recipe }))
}

/// DELETE /delete-recipe/:id?userId=
pub async fn delete_recipe(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiQuery(query): ApiQuery<ActorQuery>,
) -> Result<StatusCode> {
    let actor = access::resolve_actor(&*app_state.db, query.user_id.as_ref()).await?;
    access::require_chef(&actor, Purpose::ManageRecipes)?;

    let recipe_id = RecipeId::new(id);
    access::owned_recipe(&*app_state.db, Some(&recipe_id), &actor).await?;

    if !app_state.db.delete_recipe(&recipe_id).await? {
        return Err(ServerError::NotFound("Recipe not found".to_string()));
    }

    tracing::info!(recipe_id = %recipe_id, "recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}
