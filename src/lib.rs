//! # TinyApp
//!
//! A minimal URL shortener with per-user link ownership, built with Axum.
//!
//! Users register, log in, submit long URLs, and receive short codes that
//! redirect to them. Each link belongs to the user who created it; only the
//! owner may edit or delete it. All state lives in process memory and is
//! lost on restart.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services with the business rules
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores
//! - **Web Layer** ([`web`]) - HTML handlers, session cookie handling
//!
//! ## Features
//!
//! - Random short codes with bounded collision retry
//! - Owner-only link editing and deletion
//! - Signed (tamper-evident) session cookies, no server-side session table
//! - Bcrypt password storage
//! - JSON export of the link table
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has a default; just run it
//! cargo run
//!
//! # Or pin the bind address and session key
//! export LISTEN="127.0.0.1:8080"
//! export SESSION_SECRET="change-me"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; every variable
//! is optional. See the [`config`] module.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService, LoginOutcome, RegisterOutcome};
    pub use crate::domain::entities::{Link, NewLink, NewUser, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::web::session::Session;
}
