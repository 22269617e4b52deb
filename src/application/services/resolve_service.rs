//! Short code resolution and click counting.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for resolving short codes back to their target URLs.
///
/// Resolution and counting are deliberately decoupled: a successful lookup
/// gates the redirect, while the click increment is best-effort and must
/// never deny the user their redirect.
pub struct ResolveService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ResolveService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a short code, counting the click.
    ///
    /// The increment runs before this returns but its failure is only
    /// logged; the resolved record is returned either way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::StoreUnavailable`] when the lookup itself fails.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))?;

        if let Err(e) = self.repository.increment_clicks(code).await {
            tracing::warn!(code, error = %e, "failed to record click");
        }

        Ok(record)
    }

    /// Looks up a record without counting a click.
    ///
    /// Serves the stats endpoint; the click counter only ever moves
    /// through [`Self::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn record(code: &str, url: &str, clicks: i64) -> UrlRecord {
        let now = Utc::now();
        UrlRecord::new(1, code.to_string(), url.to_string(), clicks, now, now)
    }

    #[tokio::test]
    async fn test_resolve_increments_and_returns_target() {
        let mut mock_repo = MockUrlRepository::new();

        let found = record("abc12345", "https://example.com/", 3);
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abc12345")
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        mock_repo
            .expect_increment_clicks()
            .withf(|code| code == "abc12345")
            .times(1)
            .returning(|_| Ok(()));

        let service = ResolveService::new(Arc::new(mock_repo));

        let resolved = service.resolve("abc12345").await.unwrap();
        assert_eq!(resolved.long_url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_increment_clicks().times(0);

        let service = ResolveService::new(Arc::new(mock_repo));

        let result = service.resolve("doesNotEx").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_survives_increment_failure() {
        let mut mock_repo = MockUrlRepository::new();

        let found = record("abc12345", "https://example.com/", 0);
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        mock_repo.expect_increment_clicks().times(1).returning(|_| {
            Err(AppError::StoreUnavailable {
                reason: "write timeout".to_string(),
            })
        });

        let service = ResolveService::new(Arc::new(mock_repo));

        // A failed counter update is not a reason to deny the redirect.
        let resolved = service.resolve("abc12345").await.unwrap();
        assert_eq!(resolved.long_url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_stats_does_not_count_clicks() {
        let mut mock_repo = MockUrlRepository::new();

        let found = record("abc12345", "https://example.com/", 42);
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        mock_repo.expect_increment_clicks().times(0);

        let service = ResolveService::new(Arc::new(mock_repo));

        let stats = service.stats("abc12345").await.unwrap();
        assert_eq!(stats.clicks, 42);
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = ResolveService::new(Arc::new(mock_repo));

        let result = service.stats("missing1").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
