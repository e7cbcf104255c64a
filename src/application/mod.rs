//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API the HTTP handlers
//! call. Authorization rules (login required, owner-only mutation) are
//! enforced here, above the store layer.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - registration and login
//! - [`services::link_service::LinkService`] - short link CRUD with ownership checks

pub mod services;
