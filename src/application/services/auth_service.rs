//! Account registration and login service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::code_generator::{MAX_CODE_ATTEMPTS, generate_code};

/// Bcrypt work factor for password hashing.
///
/// Each call salts independently; two registrations with the same password
/// produce different hashes.
const BCRYPT_COST: u32 = 10;

/// Result of a registration attempt.
#[derive(Debug)]
pub enum RegisterOutcome {
    Created(User),
    EmailTaken,
}

/// Result of a login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated(User),
    UnknownEmail,
    InvalidPassword,
}

/// Service for creating accounts and verifying credentials.
///
/// Passwords are stored only as salted bcrypt hashes; verification runs the
/// candidate through `bcrypt::verify`, which compares in constant time.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new account.
    ///
    /// The caller is responsible for presence checks on email and password;
    /// this method assumes both are non-empty. The user id is generated with
    /// a bounded collision retry against the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails, the id space is
    /// exhausted, or the store errors.
    pub async fn register(&self, new_user: NewUser) -> Result<RegisterOutcome, AppError> {
        if self
            .repository
            .find_by_email(&new_user.email)
            .await?
            .is_some()
        {
            return Ok(RegisterOutcome::EmailTaken);
        }

        let password_hash = bcrypt::hash(&new_user.password, BCRYPT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let id = self.unused_id().await?;
        let user = User::new(id, new_user.email, password_hash, chrono::Utc::now());

        self.repository.insert(user.clone()).await?;
        tracing::info!(user_id = %user.id, "registered new account");

        Ok(RegisterOutcome::Created(user))
    }

    /// Verifies credentials against the stored hash.
    ///
    /// Distinguishes "no such account" from "wrong password" because the two
    /// render different views; neither mutates any state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored hash is malformed or the
    /// store errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Ok(LoginOutcome::UnknownEmail);
        };

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

        if matches {
            tracing::info!(user_id = %user.id, "login succeeded");
            Ok(LoginOutcome::Authenticated(user))
        } else {
            tracing::info!(user_id = %user.id, "login rejected: bad password");
            Ok(LoginOutcome::InvalidPassword)
        }
    }

    /// Resolves a user id from a session to the full account record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn find_user(&self, id: &str) -> Result<Option<User>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Draws user ids until one is unused, bounded by [`MAX_CODE_ATTEMPTS`].
    async fn unused_id(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let candidate = generate_code();
            if self.repository.find_by_id(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }
        Err(AppError::internal("User id space exhausted"))
    }
}
