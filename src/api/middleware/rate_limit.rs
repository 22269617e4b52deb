//! Per-client rate limiting using token buckets.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::config::Config;

/// Rate limiter for the shortening path.
///
/// Budget comes from [`Config`] (`RATE_LIMIT_SHORTEN_PER_SECOND` /
/// `RATE_LIMIT_SHORTEN_BURST`). Requests over the limit receive
/// `429 Too Many Requests`, keyed by the client's peer IP address.
pub fn shorten_layer(
    config: &Config,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    layer(
        config.rate_limit_shorten_per_second,
        config.rate_limit_shorten_burst,
    )
}

/// Rate limiter for the redirect path.
///
/// Redirects get a considerably larger budget than shortening, mirroring
/// their traffic profile (`RATE_LIMIT_REDIRECT_PER_SECOND` /
/// `RATE_LIMIT_REDIRECT_BURST`).
pub fn redirect_layer(
    config: &Config,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    layer(
        config.rate_limit_redirect_per_second,
        config.rate_limit_redirect_burst,
    )
}

fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .expect("invalid rate limiter configuration"),
    );

    GovernorLayer::new(governor_conf)
}
