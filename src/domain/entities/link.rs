//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL owned by a user.
///
/// Maps a short code to a long URL. `code` is the primary key and unique at
/// creation time. Only `long_url` is ever mutated, and only by the owner.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        long_url: String,
        owner_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            long_url,
            owner_id,
            created_at,
        }
    }

    /// Returns true if the given user id owns this link.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub long_url: String,
    pub owner_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "b2xVn2".to_string(),
            "http://www.example.com".to_string(),
            "u1abc2".to_string(),
            now,
        );

        assert_eq!(link.code, "b2xVn2");
        assert_eq!(link.long_url, "http://www.example.com");
        assert_eq!(link.owner_id, "u1abc2");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_link_ownership() {
        let link = Link::new(
            "9sm5xK".to_string(),
            "http://www.example.com".to_string(),
            "owner1".to_string(),
            Utc::now(),
        );

        assert!(link.is_owned_by("owner1"));
        assert!(!link.is_owned_by("owner2"));
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            long_url: "https://rust-lang.org".to_string(),
            owner_id: "u1abc2".to_string(),
        };

        assert_eq!(new_link.long_url, "https://rust-lang.org");
        assert_eq!(new_link.owner_id, "u1abc2");
    }
}
