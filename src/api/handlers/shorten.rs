//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::response::ApiResponse;
use crate::api::dto::shorten::{ShortenRequest, UrlData};
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the new record, or `200 OK` with the existing record
/// when the normalized URL was already shortened (idempotent dedup hit):
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "shortUrl": "https://sho.rt/abc12345",
///     "longUrl": "https://example.com/some/long/path",
///     "shortCode": "abc12345",
///     "clicks": 0,
///     "createdAt": "2026-01-01T00:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for empty or invalid input and 500 when code allocation is
/// exhausted or the store is unavailable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UrlData>>), AppError> {
    let outcome = state.shorten_service.shorten(&payload.long_url).await?;

    let status = match &outcome {
        ShortenOutcome::Created(_) => StatusCode::CREATED,
        ShortenOutcome::Existing(_) => StatusCode::OK,
    };

    let data = UrlData::from_record(outcome.record(), &state.base_url);

    Ok((status, Json(ApiResponse::new(data))))
}
