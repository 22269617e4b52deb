//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::response::ApiResponse;
use crate::api::dto::stats::StatsData;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Reads the record without counting a click; `clicks` reflects prior
/// resolutions only.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<StatsData>>, AppError> {
    let record = state.resolve_service.stats(&code).await?;

    let data = StatsData::from_record(&record, &state.base_url);

    Ok(Json(ApiResponse::new(data)))
}
