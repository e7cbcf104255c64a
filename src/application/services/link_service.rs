//! Short link creation, lookup, and ownership-checked mutation.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{MAX_CODE_ATTEMPTS, generate_code};

/// Service for managing shortened URLs.
///
/// The store layer performs no authorization, so every mutating method here
/// takes the requesting user id and checks ownership before touching the
/// repository. Failed attempts leave the store unchanged.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link for an authenticated owner.
    ///
    /// The code is drawn from the random generator and collision-checked
    /// against the store, retrying up to [`MAX_CODE_ATTEMPTS`] times before
    /// failing with a controlled error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the code space is exhausted or the
    /// store errors.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let code = self.unused_code().await?;
        let link = Link::new(
            code,
            new_link.long_url,
            new_link.owner_id,
            chrono::Utc::now(),
        );

        self.repository.insert(link.clone()).await?;
        tracing::info!(code = %link.code, owner = %link.owner_id, "created short link");

        Ok(link)
    }

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_link(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.repository.find_by_code(code).await
    }

    /// Lists the links belonging to one owner, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_links_for(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Lists every link in the store, for the JSON export.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_all_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Replaces the long URL of a link the requester owns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code and
    /// [`AppError::Forbidden`] if the requester is not the owner. In both
    /// cases the store is left unchanged.
    pub async fn update_long_url(
        &self,
        code: &str,
        new_long_url: &str,
        requester_id: &str,
    ) -> Result<Link, AppError> {
        let link = self.require_owned(code, requester_id).await?;

        self.repository.update_long_url(code, new_long_url).await?;
        tracing::info!(code = %code, owner = %requester_id, "updated short link");

        Ok(Link {
            long_url: new_long_url.to_string(),
            ..link
        })
    }

    /// Deletes a link the requester owns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code and
    /// [`AppError::Forbidden`] if the requester is not the owner. In both
    /// cases the store is left unchanged.
    pub async fn delete_link(&self, code: &str, requester_id: &str) -> Result<(), AppError> {
        self.require_owned(code, requester_id).await?;

        self.repository.delete(code).await?;
        tracing::info!(code = %code, owner = %requester_id, "deleted short link");

        Ok(())
    }

    /// Looks up a link and verifies the requester owns it.
    async fn require_owned(&self, code: &str, requester_id: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No short URL with code {code}")))?;

        if !link.is_owned_by(requester_id) {
            return Err(AppError::forbidden("You are not the owner of this short URL"));
        }

        Ok(link)
    }

    /// Draws codes until one is unused, bounded by [`MAX_CODE_ATTEMPTS`].
    async fn unused_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let candidate = generate_code();
            if self.repository.find_by_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }
        Err(AppError::internal("Short code space exhausted"))
    }
}
