//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests replenished per second, per client.
const PER_SECOND: u64 = 2;
/// Requests a client may send in a burst.
const BURST_SIZE: u32 = 100;

fn build<K>(extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(extractor)
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
/// The router must be served with connect info for the peer address to be
/// available.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    build(PeerIpKeyExtractor)
}

/// Creates a rate limiter keyed by the client IP reported by a reverse proxy.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded`, falling back to the
/// peer address. Use only behind a trusted proxy.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    build(SmartIpKeyExtractor)
}
