/// Collection counts
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use kitchen_core::{KitchenStorage, Stats};

/// GET /stats
pub async fn stats(State(app_state): State<AppState>) -> Result<Json<Stats>> {
    let stats = app_state.db.stats().await?;
    Ok(Json(stats))
}
