//! The shortened-URL record, the sole persistent entity.

use chrono::{DateTime, Utc};

/// A mapping from a short code to its original long URL.
///
/// `clicks` is monotonically non-decreasing and mutated only by the
/// resolution path; everything else is immutable after creation (the full
/// short URL is a derived display value computed at the API layer, never
/// stored).
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new record instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            clicks,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new record.
///
/// `long_url` must already be normalized; `short_code` is a candidate whose
/// uniqueness is ultimately decided by the store.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
}
