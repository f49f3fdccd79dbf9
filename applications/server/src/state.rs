/// Shared application state
use crate::services::CredentialService;
use kitchen_storage::Database;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub credentials: CredentialService,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db: Arc<Database>, credentials: CredentialService, static_dir: PathBuf) -> Self {
        Self {
            db,
            credentials,
            static_dir: Arc::new(static_dir),
        }
    }
}
