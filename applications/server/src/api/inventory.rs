//! Inventory API routes
//!
//! The pantry is shared: any existing user may read, change or delete any
//! item. `addedBy` is informational only.

use crate::{
    error::{Result, ServerError},
    extract::{ApiJson, ApiPath, ApiQuery},
    services::access,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use kitchen_core::{
    types::deserialize_optional_date, CreateInventoryItem, InventoryId, InventoryItem,
    KitchenStorage, UpdateInventoryItem, UserId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorQuery {
    pub user_id: Option<UserId>,
}

/// Body of both create and update; update only touches supplied fields
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryRequest {
    pub user_id: Option<UserId>,
    pub ingredient_name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub expiration_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub cost: Option<f64>,
}

impl InventoryRequest {
    fn validate_amounts(&self) -> Result<()> {
        if let Some(quantity) = self.quantity {
            if !quantity.is_finite() || quantity < 0.0 {
                return Err(ServerError::BadRequest(
                    "Quantity cannot be negative".to_string(),
                ));
            }
        }
        if let Some(cost) = self.cost {
            if !cost.is_finite() || cost < 0.0 {
                return Err(ServerError::BadRequest("Cost cannot be negative".to_string()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct InventoryListResponse {
    pub ok: bool,
    pub inventory: Vec<InventoryItem>,
}

#[derive(Debug, Serialize)]
pub struct InventoryItemResponse {
    pub ok: bool,
    pub item: InventoryItem,
}

fn item_not_found() -> ServerError {
    ServerError::NotFound("Inventory item not found".to_string())
}

fn required_text(value: Option<String>, message: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest(message.to_string()))
}

/// GET /inventory?userId=
pub async fn list_items(
    State(app_state): State<AppState>,
    ApiQuery(query): ApiQuery<ActorQuery>,
) -> Result<Json<InventoryListResponse>> {
    access::resolve_actor(&*app_state.db, query.user_id.as_ref()).await?;

    let inventory = app_state.db.list_items().await?;
    Ok(Json(InventoryListResponse {
        ok: true,
        inventory,
    }))
}

/// GET /inventory/:id?userId=
pub async fn get_item(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiQuery(query): ApiQuery<ActorQuery>,
) -> Result<Json<InventoryItemResponse>> {
    access::resolve_actor(&*app_state.db, query.user_id.as_ref()).await?;

    let item = app_state
        .db
        .get_item(&InventoryId::new(id))
        .await?
        .ok_or_else(item_not_found)?;

    Ok(Json(InventoryItemResponse { ok: true, item }))
}

/// POST /inventory
pub async fn create_item(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<InventoryRequest>,
) -> Result<(StatusCode, Json<InventoryItemResponse>)> {
    let actor = access::resolve_actor(&*app_state.db, req.user_id.as_ref()).await?;
    req.validate_amounts()?;

    let ingredient_name = required_text(req.ingredient_name, "Ingredient name is required")?;
    let quantity = req
        .quantity
        .ok_or_else(|| ServerError::BadRequest("Quantity is required".to_string()))?;
    let unit = required_text(req.unit, "Unit is required")?;

    let item = app_state
        .db
        .create_item(CreateInventoryItem {
            added_by: actor.user_id,
            ingredient_name,
            quantity,
            unit,
            category: req.category,
            purchase_date: req.purchase_date,
            expiration_date: req.expiration_date,
            location: req.location,
            cost: req.cost,
        })
        .await?;

    tracing::info!(inventory_id = %item.inventory_id, "inventory item created");

    Ok((
        StatusCode::CREATED,
        Json(InventoryItemResponse { ok: true, item }),
    ))
}

/// PUT /inventory/:id
pub async fn update_item(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<InventoryRequest>,
) -> Result<Json<InventoryItemResponse>> {
    access::resolve_actor(&*app_state.db, req.user_id.as_ref()).await?;
    req.validate_amounts()?;

    let mut item = app_state
        .db
        .get_item(&InventoryId::new(id))
        .await?
        .ok_or_else(item_not_found)?;

    item.apply(UpdateInventoryItem {
        ingredient_name: req
            .ingredient_name
            .map(|name| required_text(Some(name), "Ingredient name is required"))
            .transpose()?,
        quantity: req.quantity,
        unit: req
            .unit
            .map(|unit| required_text(Some(unit), "Unit is required"))
            .transpose()?,
        category: req.category,
        purchase_date: req.purchase_date,
        expiration_date: req.expiration_date,
        location: req.location,
        cost: req.cost,
    });

    let item = app_state.db.update_item(&item).await?;
    Ok(Json(InventoryItemResponse { ok: true, item }))
}

/// DELETE /inventory/:id?userId=
/// Removing an unknown item is a 404 and changes nothing
pub async fn delete_item(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiQuery(query): ApiQuery<ActorQuery>,
) -> Result<StatusCode> {
    access::resolve_actor(&*app_state.db, query.user_id.as_ref()).await?;

    let inventory_id = InventoryId::new(id);
    if !app_state.db.delete_item(&inventory_id).await? {
        return Err(item_not_found());
    }

    tracing::info!(inventory_id = %inventory_id, "inventory item deleted");
    Ok(StatusCode::NO_CONTENT)
}
