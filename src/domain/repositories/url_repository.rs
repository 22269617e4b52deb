//! Repository trait for shortened-URL data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// The persistent store contract for URL records.
///
/// Keyed by two values: the short code (uniqueness checking and
/// resolution) and the normalized long URL (deduplication). The store is
/// the single point of shared mutable state; both uniqueness on create and
/// click increments must be atomic at the storage layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record.
    ///
    /// Creation is the authoritative uniqueness guard: a race between two
    /// requests holding the same candidate code must end with exactly one
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if the short code (or the
    /// normalized long URL) already exists, and
    /// [`AppError::StoreUnavailable`] on other database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code. Exact match, no fuzzing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its normalized long URL. Exact match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the click counter and bumps `updated_at`.
    ///
    /// A no-op when the code does not exist: the caller has already
    /// validated existence, but the operation itself must not assume there
    /// was no race.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;
}
