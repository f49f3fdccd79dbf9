/// HTTP routing
use crate::{api, error::ServerError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceExt;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health).fallback(spa_fallback))
        // Accounts
        .route("/me", get(api::users::me).fallback(spa_fallback))
        .route("/register", post(api::users::register).fallback(spa_fallback))
        .route("/login", post(api::users::login).fallback(spa_fallback))
        .route("/stats", get(api::stats::stats).fallback(spa_fallback))
        // Recipes
        .route(
            "/view-recipes",
            get(api::recipes::view_recipes).fallback(spa_fallback),
        )
        .route(
            "/add-recipe",
            post(api::recipes::add_recipe).fallback(spa_fallback),
        )
        .route(
            "/edit-recipe",
            put(api::recipes::edit_recipe).fallback(spa_fallback),
        )
        .route(
            "/delete-recipe/:id",
            delete(api::recipes::delete_recipe).fallback(spa_fallback),
        )
        // Inventory
        .route(
            "/inventory",
            get(api::inventory::list_items)
                .post(api::inventory::create_item)
                .fallback(spa_fallback),
        )
        .route(
            "/inventory/:id",
            get(api::inventory::get_item)
                .put(api::inventory::update_item)
                .delete(api::inventory::delete_item)
                .fallback(spa_fallback),
        );

    api_routes
        .fallback(spa_fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Serve static frontend files, falling back to `index.html` for client-side routes
///
/// Also the method fallback of every API route: `GET /login` serves the
/// frontend, `DELETE /login` is a JSON 404.
async fn spa_fallback(State(app_state): State<AppState>, req: Request<Body>) -> Response {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return ServerError::NotFound("Not found".to_string()).into_response();
    }

    let web_dir = app_state.static_dir.as_path();
    let path = req.uri().path().trim_start_matches('/');
    let file_path = web_dir.join(path);

    if !path.is_empty() && file_path.is_file() {
        return match ServeDir::new(web_dir).oneshot(req).await {
            Ok(res) => res.into_response(),
            Err(e) => ServerError::Internal(e.to_string()).into_response(),
        };
    }

    let index_path = web_dir.join("index.html");
    match tokio::fs::read(&index_path).await {
        Ok(contents) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            contents,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            ServerError::NotFound("Not found".to_string()).into_response()
        }
        Err(e) => ServerError::Io(e).into_response(),
    }
}
