//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored long URL, byte-for-byte.
///
/// # Endpoint
///
/// `GET /u/{code}`
///
/// Public: no session required. Uses 307 so the target URL is passed through
/// unmodified.
///
/// # Errors
///
/// Returns 404 for an unknown code. (The original dereferenced the record
/// unconditionally and crashed the request on a miss; the controlled
/// not-found path is deliberate.)
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let link = state
        .link_service
        .get_link(&code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No short URL with code {code}")))?;

    debug!(code = %code, target = %link.long_url, "redirecting short link");

    Ok(Redirect::temporary(&link.long_url))
}
