//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

use crate::domain::entities::FavoriteSource;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching favorite sources by id.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures should degrade to repository lookups).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a favorite source from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(source))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_favorite_source(&self, id: i64) -> CacheResult<Option<FavoriteSource>>;

    /// Stores a favorite source with an optional TTL in seconds.
    ///
    /// Implementations log failures and return `Ok(())`.
    async fn set_favorite_source(
        &self,
        favorite_source: &FavoriteSource,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
