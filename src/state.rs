//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::{MemoryLinkRepository, MemoryUserRepository};

/// Shared state: the two services over their in-memory stores, plus the
/// session signing secret.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<MemoryUserRepository>>,
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub session_secret: Arc<String>,
}

impl AppState {
    /// Creates application state with fresh, empty stores.
    pub fn new(session_secret: String) -> Self {
        let user_repository = Arc::new(MemoryUserRepository::new());
        let link_repository = Arc::new(MemoryLinkRepository::new());

        Self {
            auth_service: Arc::new(AuthService::new(user_repository)),
            link_service: Arc::new(LinkService::new(link_repository)),
            session_secret: Arc::new(session_secret),
        }
    }
}
