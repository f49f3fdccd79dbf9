/// API route modules
pub mod health;
pub mod inventory;
pub mod recipes;
pub mod stats;
pub mod users;
