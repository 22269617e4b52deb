//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// Request to shorten a single URL.
///
/// A missing `longUrl` member deserializes as the empty string and is
/// rejected by the service as empty input, keeping the error in the API's
/// own 400 shape instead of a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub long_url: String,
}

/// Shortened URL representation returned on creation and dedup hits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlData {
    pub short_url: String,
    pub long_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlData {
    /// Builds the wire representation, deriving the display short URL from
    /// the configured base URL. The short URL is recomputable and never a
    /// source of truth.
    pub fn from_record(record: &UrlRecord, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/{}", base_url.trim_end_matches('/'), record.short_code),
            long_url: record.long_url.clone(),
            short_code: record.short_code.clone(),
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}
