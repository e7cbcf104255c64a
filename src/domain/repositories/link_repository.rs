//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened URLs.
///
/// The store layer enforces no authorization: `update_long_url` and `delete`
/// succeed unconditionally when the code exists. Ownership checks belong to
/// [`crate::application::services::LinkService`], which calls these methods
/// only after verifying the requester.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists links belonging to the given owner, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError>;

    /// Lists every link in the store, in insertion order.
    ///
    /// Used by the JSON export endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Inserts a new link keyed by its short code.
    ///
    /// The caller must have collision-checked the code beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, link: Link) -> Result<(), AppError>;

    /// Replaces the long URL of an existing link.
    ///
    /// Returns `Ok(true)` if the code was found and updated, `Ok(false)` if
    /// no such code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn update_long_url(&self, code: &str, new_long_url: &str) -> Result<bool, AppError>;

    /// Removes a link by code.
    ///
    /// Returns `Ok(true)` if the code was found and removed, `Ok(false)` if
    /// no such code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
