//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// Users are created once at registration and never mutated or deleted
/// afterwards; the only way to drop an account is a process restart.
/// `id` is the primary key and must be unique.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Bcrypt hash, never the plaintext password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}
