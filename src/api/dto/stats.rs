//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Statistics for a single short link.
///
/// Same shape as the shorten response plus `updatedAt`, which moves on
/// every click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub short_url: String,
    pub long_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StatsData {
    pub fn from_record(record: &UrlRecord, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/{}", base_url.trim_end_matches('/'), record.short_code),
            long_url: record.long_url.clone(),
            short_code: record.short_code.clone(),
            clicks: record.clicks,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
