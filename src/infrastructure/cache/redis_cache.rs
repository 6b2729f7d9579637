//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::FavoriteSource;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for favorite source lookups.
///
/// Entries are JSON-encoded entities stored under `favorite_source:{id}`.
/// All operations are fail-open: errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "favorite_source:".to_string(),
        })
    }

    fn build_key(&self, id: i64) -> String {
        format!("{}{}", self.key_prefix, id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_favorite_source(&self, id: i64) -> CacheResult<Option<FavoriteSource>> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<FavoriteSource>(&payload) {
                Ok(favorite) => {
                    debug!("Cache HIT: {}", key);
                    Ok(Some(favorite))
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set_favorite_source(
        &self,
        favorite_source: &FavoriteSource,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(favorite_source.id);
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        let payload = serde_json::to_string(favorite_source)
            .map_err(|e| CacheError::OperationError(e.to_string()))?;

        let mut conn = self.client.clone();
        match conn.set_ex::<_, _, ()>(&key, payload, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
