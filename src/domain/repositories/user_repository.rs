//! Repository trait for user account data access.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered accounts.
///
/// Users are insert-only: there are no update or delete operations, and none
/// are planned. Lookup by email is defined as a case-sensitive exact match.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email (case-sensitive exact match, linear scan).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by id (direct lookup).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user keyed by id.
    ///
    /// The caller must have collision-checked the id beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, user: User) -> Result<(), AppError>;
}
