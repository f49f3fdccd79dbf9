//! Cloud Kitchen Server Library
//!
//! Recipe and inventory REST backend with a role check (chef or not) and
//! per-recipe ownership, plus static hosting of the single-page frontend.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{PasswordScheme, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::CredentialService;
pub use state::AppState;
