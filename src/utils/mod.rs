//! Utility functions shared across the application.
//!
//! - [`code_generator`] - random identifier generation for codes and user ids

pub mod code_generator;
