/// Core error types for Cloud Kitchen
use thiserror::Error;

/// Result type alias using `KitchenError`
pub type Result<T> = std::result::Result<T, KitchenError>;

/// Core error type for Cloud Kitchen
#[derive(Error, Debug)]
pub enum KitchenError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name (e.g. "Recipe")
        entity: String,
        /// Identifier that was looked up
        id: String,
    },

    /// A unique field collided with an existing record
    #[error("{field} already exists")]
    Conflict {
        /// camelCase name of the colliding field
        field: String,
    },

    /// Another recipe already uses this (chef, title) pair
    #[error("A recipe with this title already exists for this chef")]
    DuplicateTitle,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Permission denied with context
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl KitchenError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a conflict error for a unique field
    pub fn conflict(field: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for KitchenError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return Self::conflict(violated_field(db_err.message()));
            }
        }
        Self::Database(err.to_string())
    }
}

/// Extract the offending column from a SQLite unique-constraint message.
///
/// `"UNIQUE constraint failed: users.email"` yields `"email"`; for composite
/// indexes the last column is reported.
pub fn violated_field(message: &str) -> String {
    let columns = message.split_once(": ").map_or(message, |(_, cols)| cols);
    let last = columns.rsplit(", ").next().unwrap_or(columns);
    let column = last.rsplit('.').next().unwrap_or(last);
    snake_to_camel(column.trim())
}

fn snake_to_camel(column: &str) -> String {
    let mut out = String::with_capacity(column.len());
    let mut upper = false;
    for ch in column.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
