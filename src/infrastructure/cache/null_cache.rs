//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService};
use crate::domain::entities::FavoriteSource;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is not configured or unreachable at startup. Every lookup
/// is a miss and every store succeeds without keeping anything.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_favorite_source(&self, _id: i64) -> CacheResult<Option<FavoriteSource>> {
        Ok(None)
    }

    async fn set_favorite_source(
        &self,
        _favorite_source: &FavoriteSource,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();
        let favorite = FavoriteSource::new(1, "bbc.com".to_string());

        cache.set_favorite_source(&favorite, None).await.unwrap();

        assert!(cache.get_favorite_source(1).await.unwrap().is_none());
        assert!(cache.health_check().await);
    }
}
