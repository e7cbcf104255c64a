//! Web layer: HTML pages, session handling, JSON export.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - request handlers
//! - [`session`] - signed cookie codec and per-request session extractor

pub mod handlers;
pub mod session;
