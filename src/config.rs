//! Application configuration loaded from environment variables.
//!
//! The service is deliberately light on configuration: everything has a
//! default and nothing external (database, cache) exists to point at.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `SESSION_SECRET` - HMAC key for session cookie signing. When unset, a
//!   random per-boot secret is generated, which invalidates all sessions on
//!   restart (the stores are volatile anyway, so no session can outlive its
//!   user).
//! - `RUST_LOG` - Log level (default: `info`)

use anyhow::Result;
use base64::Engine as _;
use rand::RngCore;
use std::env;

const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// HMAC signing secret for session cookies.
    pub session_secret: String,
    /// True when the secret was generated at boot rather than configured.
    pub secret_generated: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, generating a session
    /// secret if none is configured.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let (session_secret, secret_generated) = match env::var("SESSION_SECRET") {
            Ok(secret) if !secret.is_empty() => (secret, false),
            _ => (random_secret(), true),
        };

        Self {
            listen_addr,
            session_secret,
            secret_generated,
            log_level,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address is malformed or the session
    /// secret is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_secret.is_empty() {
            anyhow::bail!("SESSION_SECRET must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);

        if self.secret_generated {
            tracing::warn!(
                "  Session secret: generated for this boot; sessions will not survive a restart"
            );
        } else {
            tracing::info!("  Session secret: configured via SESSION_SECRET");
        }
    }
}

/// Generates a random 256-bit session signing secret, base64-encoded.
fn random_secret() -> String {
    let mut buf = [0u8; 32];
    rand::rng().fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
