/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kitchen_core::KitchenError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(KitchenError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl ServerError {
    /// Status code this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServerError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<KitchenError> for ServerError {
    fn from(err: KitchenError) -> Self {
        match err {
            KitchenError::NotFound { entity, .. } => ServerError::NotFound(format!("{entity} not found")),
            KitchenError::Conflict { field } => ServerError::Conflict(format!("{field} already exists")),
            e @ KitchenError::DuplicateTitle => ServerError::BadRequest(e.to_string()),
            KitchenError::InvalidInput(msg) => ServerError::BadRequest(msg),
            KitchenError::PermissionDenied(msg) => ServerError::Forbidden(msg),
            other => ServerError::Database(other),
        }
    }
}

impl From<kitchen_storage::StorageError> for ServerError {
    fn from(err: kitchen_storage::StorageError) -> Self {
        // StorageError -> KitchenError -> ServerError
        KitchenError::from(err).into()
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::Unauthorized(msg)
            | ServerError::Forbidden(msg)
            | ServerError::NotFound(msg)
            | ServerError::BadRequest(msg)
            | ServerError::Conflict(msg) => msg,
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Server error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Server error".to_string()
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Server error".to_string()
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                "Server error".to_string()
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                "Server error".to_string()
            }
        };

        let body = Json(json!({
            "ok": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
