//! URL shortening service: validation, deduplication, and code allocation.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::{UrlNormalizationError, normalize_url};

/// Upper bound on generate-and-create cycles before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Result of a shorten call.
///
/// The HTTP layer maps `Created` to 201 and `Existing` (dedup hit) to 200.
#[derive(Debug, Clone)]
pub enum ShortenOutcome {
    Created(UrlRecord),
    Existing(UrlRecord),
}

impl ShortenOutcome {
    /// The record regardless of how it was obtained.
    pub fn record(&self) -> &UrlRecord {
        match self {
            Self::Created(record) | Self::Existing(record) => record,
        }
    }
}

/// Service for creating shortened URLs.
///
/// Normalizes and validates input, returns the existing record for
/// already-shortened URLs, and allocates fresh codes with a bounded retry
/// protocol. Holds no state besides the repository handle; all
/// cross-request coordination is the store's uniqueness constraint.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens a raw URL, returning the new or existing record.
    ///
    /// # Flow
    ///
    /// 1. Trim and normalize the input (prepending `https://` when no
    ///    scheme is given)
    /// 2. Return the existing record unchanged if the normalized URL was
    ///    already shortened (idempotent, no side effect)
    /// 3. Otherwise run up to [`MAX_CODE_ATTEMPTS`] generate-and-create
    ///    cycles; the pre-create existence check only avoids predictably
    ///    failing inserts, while the insert itself is the race-safe
    ///    uniqueness guard
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyInput`] for blank input
    /// - [`AppError::InvalidUrl`] for input that does not normalize to an
    ///   absolute HTTP(S) URL with a host
    /// - [`AppError::CodeAllocationExhausted`] after exhausting all
    ///   attempts
    /// - [`AppError::StoreUnavailable`] propagated from the store
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortenOutcome, AppError> {
        let normalized = normalize_url(raw_url).map_err(|e| match e {
            UrlNormalizationError::Empty => AppError::EmptyInput,
            other => AppError::invalid_url(other.to_string()),
        })?;

        if let Some(existing) = self.repository.find_by_long_url(&normalized).await? {
            return Ok(ShortenOutcome::Existing(existing));
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_code(&code).await?.is_some() {
                tracing::warn!(attempt, "generated code already taken, retrying");
                continue;
            }

            let candidate = NewUrlRecord {
                short_code: code,
                long_url: normalized.clone(),
            };

            match self.repository.create(candidate).await {
                Ok(record) => return Ok(ShortenOutcome::Created(record)),
                Err(AppError::DuplicateKey { constraint }) => {
                    // Lost a race. A concurrent request may have shortened
                    // the same URL; if so its record wins. Otherwise the
                    // code collided and a fresh candidate is needed.
                    if let Some(existing) = self.repository.find_by_long_url(&normalized).await? {
                        return Ok(ShortenOutcome::Existing(existing));
                    }
                    tracing::warn!(attempt, %constraint, "code collision on insert, retrying");
                }
                Err(other) => return Err(other),
            }
        }

        Err(AppError::CodeAllocationExhausted)
    }
}
