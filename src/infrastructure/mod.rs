//! Infrastructure layer implementing domain contracts.
//!
//! # Modules
//!
//! - [`persistence`] - in-memory repository implementations

pub mod persistence;
