//! Cloud Kitchen Storage
//!
//! `SQLite` database layer for Cloud Kitchen.
//!
//! This crate persists the three kitchen collections (users, recipes and
//! inventory items) and allocates their human-readable IDs.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each collection owns its own queries and row mapping
//! - **Atomic IDs**: `sequences` hands out `<prefix>-#####` IDs from a counter
//!   row advanced in a single statement, so concurrent creates never collide
//! - **Unique Backstops**: unique indexes on email, IDs and the normalized
//!   `(chef, title)` pair catch anything that slips past handler checks
//!
//! # Example
//!
//! ```rust,no_run
//! use kitchen_storage::{LocalStorageContext, create_pool, run_migrations};
//! use kitchen_core::KitchenStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://kitchen.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let stats = storage.stats().await?;
//! println!("{} recipes", stats.recipes);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod time;

// Vertical slices
pub mod inventory;
pub mod recipes;
pub mod sequences;
pub mod users;

pub use context::LocalStorageContext;
pub use error::StorageError;

// Name used by the server
pub type Database = LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// In-memory URLs get a single long-lived connection, since every `SQLite`
/// memory connection is its own database.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://kitchen.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating sqlite pool");

    let in_memory = database_url.contains(":memory:");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(if in_memory {
            SqliteJournalMode::Memory
        } else {
            SqliteJournalMode::Wal
        })
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::debug!("sqlite pool ready");

    Ok(pool)
}

/// Create a pool, apply migrations and wrap it in a storage context
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn connect(database_url: &str) -> Result<LocalStorageContext, StorageError> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    Ok(LocalStorageContext::new(pool))
}
