//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account
//! - [`Link`] - A shortened URL mapping owned by a user
//!
//! Creation inputs use separate structs ([`NewUser`], [`NewLink`]) so that
//! generated fields (ids, codes, timestamps) stay under service control.

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::{NewUser, User};
