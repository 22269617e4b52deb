//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`           - Short link redirect (public, rate limited)
//! - `GET  /health`           - Health check (public)
//! - `POST /api/shorten`      - Create short link (rate limited)
//! - `GET  /api/stats/{code}` - Link statistics
//!
//! Exact-match routes (`/health`, `/api/...`) are registered alongside the
//! `/{code}` capture and win in axum's routing, so reserved segments never
//! reach the redirect handler through those paths; the handler itself
//! rejects `favicon.ico` and friends as a second line.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token buckets, separate budgets for the
//!   shorten and redirect paths
//! - **Path normalization** - Trailing slash handling

use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let shorten_routes = Router::new()
        .route("/shorten", post(shorten_handler))
        .layer(rate_limit::shorten_layer(config));

    let stats_routes = Router::new().route("/stats/{code}", get(stats_handler));

    let api_router = shorten_routes.merge(stats_routes);

    let redirect_routes = Router::new()
        .route("/{code}", get(redirect_handler))
        .layer(rate_limit::redirect_layer(config));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(redirect_routes)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
