//! Signed session cookie codec and the per-request session context.
//!
//! The session is a single client-held cookie carrying the user id, signed
//! (not encrypted) with HMAC-SHA256 under the server secret: the id is
//! visible to the client but cannot be forged without the key. There is no
//! server-side session table and no revocation list; a cookie stays valid
//! until the signing secret rotates or the client discards it.
//!
//! # Cookie Format
//!
//! ```text
//! session=<base64url(user_id)>.<hex(hmac_sha256(user_id))>
//! ```
//!
//! Handlers never see the raw cookie string. The [`Session`] extractor
//! decodes and verifies it once per request and resolves the id to a full
//! [`User`] record, so a session for a user that no longer exists (possible
//! only across a restart) degrades to anonymous.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Signs a user id into a session cookie value.
pub fn encode(user_id: &str, secret: &str) -> String {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(user_id.as_bytes());
    let signature = hex::encode(sign(user_id.as_bytes(), secret));
    format!("{payload}.{signature}")
}

/// Verifies a session cookie value and extracts the user id.
///
/// Returns `None` for anything malformed, tampered with, or signed under a
/// different secret. Verification is constant-time via `Mac::verify_slice`.
pub fn decode(value: &str, secret: &str) -> Option<String> {
    let (payload, signature) = value.split_once('.')?;

    let user_id = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    let signature = hex::decode(signature).ok()?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(&user_id);
    mac.verify_slice(&signature).ok()?;

    String::from_utf8(user_id).ok()
}

fn sign(payload: &[u8], secret: &str) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

/// `Set-Cookie` value establishing a session for the given user.
pub fn set_cookie(user_id: &str, secret: &str) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        encode(user_id, secret)
    )
}

/// `Set-Cookie` value clearing the session cookie by name.
pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Typed per-request session context.
///
/// `user` is `Some` only when the request carried a validly signed cookie
/// referencing an existing account; everything else is anonymous.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    /// The current user id, if authenticated.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// The current user's email, for template headers.
    pub fn email(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.email.clone())
    }

    /// Returns the authenticated user or a 403.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] with the given message when anonymous.
    pub fn require_user(&self, message: &str) -> Result<&User, AppError> {
        self.user.as_ref().ok_or_else(|| AppError::forbidden(message))
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(COOKIE)
            .and_then(|cookie_header| cookie_header.to_str().ok())
            .and_then(|cookie_str| {
                cookie_str.split(';').find_map(|cookie| {
                    let mut parts = cookie.trim().splitn(2, '=');
                    match (parts.next(), parts.next()) {
                        (Some(name), Some(value)) if name == SESSION_COOKIE => {
                            Some(value.to_string())
                        }
                        _ => None,
                    }
                })
            });

        let user = match raw.and_then(|value| decode(&value, &state.session_secret)) {
            // A store fault here degrades to anonymous rather than failing
            // the request; every protected path re-checks authorization.
            Some(user_id) => state.auth_service.find_user(&user_id).await.ok().flatten(),
            None => None,
        };

        Ok(Session { user })
    }
}
