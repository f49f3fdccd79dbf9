//! Cloud Kitchen Core
//!
//! Storage-agnostic domain types, traits, and error handling for Cloud Kitchen.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Recipe`, `InventoryItem` and their human-readable IDs
//! - **Input Normalization**: the list/string/keyed shapes accepted for recipe fields
//! - **Storage Trait**: `KitchenStorage`, implemented by `kitchen-storage`
//! - **Error Handling**: Unified `KitchenError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use kitchen_core::types::{EntityKind, RecipeId};
//!
//! let id = RecipeId::from_sequence(7);
//! assert_eq!(id.as_str(), "R-00007");
//! assert_eq!(id.sequence(), Some(7));
//! assert_eq!(EntityKind::User.format(12), "U-00012");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{KitchenError, Result};
pub use storage::KitchenStorage;

pub use types::{
    CreateInventoryItem, CreateRecipe, CreateUser, EntityKind, IngredientsInput,
    InstructionsInput, InventoryId, InventoryItem, Recipe, RecipeId, Role, Stats,
    UpdateInventoryItem, UpdateRecipe, User, UserId,
};
