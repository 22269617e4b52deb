//! Application error taxonomy and HTTP response mapping.
//!
//! Client input errors surface as 400, a missing code as 404, and
//! everything infrastructure-shaped as a generic 500. [`AppError::DuplicateKey`]
//! exists so the shortening service can recover from code collisions; it is
//! never meant to reach a client unmapped.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL was empty or whitespace.
    #[error("Please provide a URL to shorten")]
    EmptyInput,

    /// The submitted URL is not a well-formed absolute HTTP(S) URL.
    #[error("Please provide a valid URL")]
    InvalidUrl { reason: String },

    /// No record exists for the requested short code.
    #[error("Short URL not found")]
    NotFound { code: String },

    /// Every code-allocation attempt collided with an existing code.
    ///
    /// Transient: the client can simply retry the request.
    #[error("Unable to generate unique short code. Please try again.")]
    CodeAllocationExhausted,

    /// A store-level uniqueness constraint rejected a write.
    ///
    /// Recovered locally by the shortening service's retry loop.
    #[error("Duplicate key on constraint {constraint}")]
    DuplicateKey { constraint: String },

    /// The backing store failed or is unreachable.
    #[error("Storage unavailable")]
    StoreUnavailable { reason: String },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }
}

/// JSON error body: `{"success":false,"error":"..."}`, with the offending
/// short code included on 404s.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(rename = "shortCode", skip_serializing_if = "Option::is_none")]
    short_code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, short_code) = match &self {
            AppError::EmptyInput | AppError::InvalidUrl { .. } => (StatusCode::BAD_REQUEST, None),
            AppError::NotFound { code } => (StatusCode::NOT_FOUND, Some(code.clone())),
            AppError::CodeAllocationExhausted => (StatusCode::INTERNAL_SERVER_ERROR, None),
            AppError::DuplicateKey { .. } | AppError::StoreUnavailable { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        match &self {
            AppError::InvalidUrl { reason } => {
                tracing::debug!(%reason, "rejected invalid URL");
            }
            AppError::CodeAllocationExhausted => {
                tracing::error!("code allocation exhausted");
            }
            AppError::DuplicateKey { constraint } => {
                tracing::error!(%constraint, "unrecovered duplicate key");
            }
            AppError::StoreUnavailable { reason } => {
                tracing::error!(%reason, "store failure");
            }
            _ => {}
        }

        let message = match &self {
            // Do not leak storage details to clients.
            AppError::StoreUnavailable { .. } | AppError::DuplicateKey { .. } => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            success: false,
            error: message,
            short_code,
        };

        (status, Json(body)).into_response()
    }
}
