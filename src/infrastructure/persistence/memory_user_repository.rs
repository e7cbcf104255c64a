//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// In-process account store backed by a `HashMap` keyed by user id.
///
/// Email lookup is a linear scan with a case-sensitive exact match, matching
/// the repository contract. All state is volatile and lost on restart.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: &str, email: &str) -> User {
        User::new(
            id.to_string(),
            email.to_string(),
            "$2b$10$hash".to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let repo = MemoryUserRepository::new();
        repo.insert(user("u1", "a@x.com")).await.unwrap();

        let found = repo.find_by_id("u1").await.unwrap();
        assert_eq!(found.unwrap().email, "a@x.com");

        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_exact_match() {
        let repo = MemoryUserRepository::new();
        repo.insert(user("u1", "a@x.com")).await.unwrap();

        assert!(repo.find_by_email("a@x.com").await.unwrap().is_some());
        // Case-sensitive: a differently-cased email is a different email.
        assert!(repo.find_by_email("A@X.com").await.unwrap().is_none());
        assert!(repo.find_by_email("b@x.com").await.unwrap().is_none());
    }
}
