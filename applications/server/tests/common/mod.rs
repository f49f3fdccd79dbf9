//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use kitchen_server::{create_router, AppState, CredentialService, PasswordScheme};
use kitchen_storage::Database;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const INDEX_HTML: &str = "<!doctype html><title>Cloud Kitchen</title>";

/// Router backed by a temp-file database and a temp static directory
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_scheme(PasswordScheme::Plaintext).await
    }

    pub async fn with_scheme(scheme: PasswordScheme) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let db = Arc::new(
            kitchen_storage::connect(&db_url)
                .await
                .expect("Failed to open test database"),
        );

        let static_dir = temp_dir.path().join("web");
        std::fs::create_dir_all(static_dir.join("assets")).unwrap();
        std::fs::write(static_dir.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(static_dir.join("assets/app.js"), "console.log('kitchen');").unwrap();

        let app_state = AppState::new(db.clone(), CredentialService::new(scheme), static_dir);

        Self {
            router: create_router(app_state),
            db,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(method, uri, body).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Register a user and return its `userId`
    pub async fn register(&self, email: &str, role: &str) -> String {
        let (status, body) = self
            .post(
                "/register",
                serde_json::json!({
                    "fullname": format!("Cook {email}"),
                    "email": email,
                    "password": fixtures::PASSWORD,
                    "role": role,
                    "phone": "555-0100",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["user"]["userId"].as_str().unwrap().to_string()
    }

    /// Add a recipe as `user_id` and return its `recipeId`
    pub async fn add_recipe(&self, user_id: &str, chef: &str, title: &str) -> String {
        let (status, body) = self
            .post(
                "/add-recipe",
                serde_json::json!({
                    "userId": user_id,
                    "title": title,
                    "chef": chef,
                    "ingredients": ["2 eggs", "1 cup flour"],
                    "instructions": "Whisk\nFry",
                    "mealType": "Breakfast",
                    "cuisineType": "French",
                    "prepTime": 15,
                    "difficulty": "Easy",
                    "servings": 2,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "add-recipe failed: {body}");
        body["recipe"]["recipeId"].as_str().unwrap().to_string()
    }

    /// Add an inventory item as `user_id` and return its `inventoryId`
    pub async fn add_item(&self, user_id: &str, name: &str) -> String {
        let (status, body) = self
            .post(
                "/inventory",
                serde_json::json!({
                    "userId": user_id,
                    "ingredientName": name,
                    "quantity": 3,
                    "unit": "kg",
                    "category": "Dry goods",
                    "purchaseDate": "2025-01-10",
                    "expirationDate": "2025-06-30T00:00:00Z",
                    "location": "Pantry",
                    "cost": 12.5,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "add inventory failed: {body}");
        body["item"]["inventoryId"].as_str().unwrap().to_string()
    }
}

/// Test user credentials
pub mod fixtures {
    pub const PASSWORD: &str = "TestPassword123!";
}
