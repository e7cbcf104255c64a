//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits backed by
//! process-local collections behind `tokio::sync::RwLock`. There is no
//! persistence: a restart discards every user and link.
//!
//! # Repositories
//!
//! - [`MemoryUserRepository`] - account storage
//! - [`MemoryLinkRepository`] - short link storage

pub mod memory_link_repository;
pub mod memory_user_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use memory_user_repository::MemoryUserRepository;
