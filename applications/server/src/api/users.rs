/// Account API routes
use crate::{
    error::Result,
    extract::{ApiJson, ApiQuery},
    services::{access, accounts},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use kitchen_core::{User, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeQuery {
    pub user_id: Option<UserId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub ok: bool,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub ok: bool,
    pub message: String,
    pub user: User,
}

/// GET /me?userId=
pub async fn me(
    State(app_state): State<AppState>,
    ApiQuery(query): ApiQuery<MeQuery>,
) -> Result<Json<UserResponse>> {
    let user = access::resolve_actor(&*app_state.db, query.user_id.as_ref()).await?;
    Ok(Json(UserResponse { ok: true, user }))
}

/// POST /register
pub async fn register(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let form = accounts::Registration {
        fullname: req.fullname,
        email: req.email,
        password: req.password,
        role: req.role,
        phone: req.phone,
    };
    let user = accounts::register(&*app_state.db, &app_state.credentials, form).await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            ok: true,
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<AccountResponse>> {
    let user = accounts::login(
        &*app_state.db,
        &app_state.credentials,
        &req.email,
        &req.password,
    )
    .await?;

    tracing::debug!(user_id = %user.user_id, "login");

    Ok(Json(AccountResponse {
        ok: true,
        message: "Login successful".to_string(),
        user,
    }))
}
