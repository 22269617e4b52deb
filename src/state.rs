//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::infrastructure::persistence::PgUrlRepository;

/// Shortening service over the production repository.
pub type AppShortenService = ShortenService<PgUrlRepository>;

/// Resolution service over the production repository.
pub type AppResolveService = ResolveService<PgUrlRepository>;

/// State shared across all request handlers.
///
/// The pool is the only shared mutable resource; the services themselves
/// are stateless.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<AppShortenService>,
    pub resolve_service: Arc<AppResolveService>,
    /// Public base URL for derived short URLs in responses.
    pub base_url: String,
    /// Kept for the health check's connectivity probe.
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires services over a single repository backed by `pool`.
    pub fn new(pool: Arc<PgPool>, base_url: String) -> Self {
        let repository = Arc::new(PgUrlRepository::new(pool.clone()));

        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone())),
            resolve_service: Arc::new(ResolveService::new(repository)),
            base_url,
            db: pool,
        }
    }
}
