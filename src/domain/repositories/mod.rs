//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern, so the
//! in-memory stores could be swapped for a persistent backend without
//! touching handler or service logic.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - account lookup and insertion
//! - [`LinkRepository`] - short link CRUD operations
//!
//! Concrete implementations live in [`crate::infrastructure::persistence`].
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
