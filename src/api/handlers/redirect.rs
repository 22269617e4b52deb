//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject reserved path segments (`api`, `health`, `favicon.ico`)
///    before touching the store
/// 2. Resolve the code; the click counter is incremented synchronously but
///    best-effort inside the resolution service
/// 3. Respond `301 Moved Permanently` with the target in `Location`
///
/// # Errors
///
/// Returns 404 with `{"success":false,"error":...,"shortCode":...}` when
/// the code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if code_generator::is_reserved(&code) {
        return Err(AppError::not_found(code));
    }

    let record = state.resolve_service.resolve(&code).await?;

    debug!(%code, target = %record.long_url, "redirecting");

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, record.long_url)],
    ))
}
