//! Unified error handling for route handlers.
//!
//! Handlers return `Result<T, AppError>`; the `IntoResponse` impl maps
//! each variant to a status code and logs server-side failures without
//! leaking their details to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found (e.g. a buy control pointing at a listing that
    /// no longer exists).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session load/store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::NotFound(_) => self.to_string(),
            Self::Session(e) => {
                tracing::error!(error = %e, "Session failure");
                "Internal server error".to_string()
            }
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
