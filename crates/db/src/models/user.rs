//! User entity model and write DTOs.

use gazette_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- render layers must never emit it.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub nickname: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new user. `password_hash` is the PHC string
/// produced by the password hasher, never a plaintext password.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    pub nickname: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Full-row replacement for an existing user (password handled separately
/// via `UserRepo::update_password`).
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: String,
    pub surname: String,
    pub nickname: String,
    pub is_admin: bool,
}
