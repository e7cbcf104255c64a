//! In-memory link repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-process link store backed by a `Vec` in insertion order.
///
/// Code lookup is a linear scan; the table stays small enough that a keyed
/// index would buy nothing, and the `Vec` keeps `list_by_owner` / `list_all`
/// in insertion order without an explicit sort, as the contract requires.
/// All state is volatile and lost on restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<Vec<Link>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().await;
        Ok(links.iter().find(|l| l.code == code).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().await;
        Ok(links
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().await;
        Ok(links.clone())
    }

    async fn insert(&self, link: Link) -> Result<(), AppError> {
        let mut links = self.links.write().await;
        links.push(link);
        Ok(())
    }

    async fn update_long_url(&self, code: &str, new_long_url: &str) -> Result<bool, AppError> {
        let mut links = self.links.write().await;
        match links.iter_mut().find(|l| l.code == code) {
            Some(link) => {
                link.long_url = new_long_url.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.write().await;
        let before = links.len();
        links.retain(|l| l.code != code);
        Ok(links.len() < before)
    }
}
