//! User registration and lookup queries

use crate::{sequences, time};
use kitchen_core::{
    error::Result,
    types::{CreateUser, EntityKind, Role, User, UserId},
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const COLUMNS: &str = "user_id, fullname, email, password, role, phone, created_at";

fn from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        user_id: row.try_get("user_id")?,
        fullname: row.try_get("fullname")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        role: row.try_get::<String, _>("role")?.parse::<Role>()?,
        phone: row.try_get("phone")?,
        created_at: time::from_millis(row.try_get("created_at")?)?,
    })
}

/// Register a user under a freshly allocated `U-#####` ID
///
/// A duplicate email surfaces as `KitchenError::Conflict { field: "email" }`.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    let user_id = UserId::new(sequences::next(pool, EntityKind::User).await?);
    let created_at = time::now();

    sqlx::query(
        "INSERT INTO users (user_id, fullname, email, password, role, phone, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&user_id)
    .bind(&user.fullname)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.role.as_str())
    .bind(&user.phone)
    .bind(created_at.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(User {
        user_id,
        fullname: user.fullname,
        email: user.email,
        password: user.password,
        role: user.role,
        phone: user.phone,
        created_at,
    })
}

/// Get a user by human-readable ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM users WHERE user_id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Find a user by exact email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM users WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Get all users in registration order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM users ORDER BY id"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

/// Number of registered users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
