//! Application error type and HTTP response mapping.
//!
//! Only terminal request failures become an [`AppError`]: authorization
//! failures (403), unknown short codes on mutation/redirect paths (404), and
//! store faults (500). Form-level validation failures never reach this type;
//! handlers re-render the originating form with HTTP 200 instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors surfaced to the client as plain-text HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requester is not logged in or does not own the record.
    #[error("{message}")]
    Forbidden { message: String },

    /// The referenced record does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// Unexpected store or service fault.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(%status, "request failed: {self}");
        }

        (status, self.to_string()).into_response()
    }
}
