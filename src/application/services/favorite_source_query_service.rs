//! Read-side service for favorite sources.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::domain::entities::FavoriteSource;
use crate::domain::error::FavoriteSourceError;
use crate::domain::queries::{GetAllFavoriteSourcesQuery, GetFavoriteSourceByIdQuery};
use crate::domain::repositories::FavoriteSourceRepository;
use crate::infrastructure::cache::CacheService;

/// Handles read-only favorite source queries.
#[async_trait]
pub trait FavoriteSourceQueryService: Send + Sync {
    /// Resolves a favorite source by id.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::NotFound`] if no favorite source has the id.
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn handle_get_by_id(
        &self,
        query: GetFavoriteSourceByIdQuery,
    ) -> Result<FavoriteSource, FavoriteSourceError>;

    /// Lists one page of favorite sources ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn handle_get_all(
        &self,
        query: GetAllFavoriteSourcesQuery,
    ) -> Result<Vec<FavoriteSource>, FavoriteSourceError>;

    /// Counts stored favorite sources. Used by health checks.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn count(&self) -> Result<i64, FavoriteSourceError>;
}

/// Repository-backed query service with a read-through cache.
pub struct FavoriteSourceQueryServiceImpl<R: FavoriteSourceRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: FavoriteSourceRepository> FavoriteSourceQueryServiceImpl<R> {
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R: FavoriteSourceRepository> FavoriteSourceQueryService for FavoriteSourceQueryServiceImpl<R> {
    async fn handle_get_by_id(
        &self,
        query: GetFavoriteSourceByIdQuery,
    ) -> Result<FavoriteSource, FavoriteSourceError> {
        if let Ok(Some(cached)) = self.cache.get_favorite_source(query.id).await {
            return Ok(cached);
        }

        let favorite = self
            .repository
            .find_by_id(query.id)
            .await?
            .ok_or(FavoriteSourceError::NotFound { id: query.id })?;

        if let Err(e) = self.cache.set_favorite_source(&favorite, None).await {
            warn!("Failed to cache favorite source {}: {}", favorite.id, e);
        }

        Ok(favorite)
    }

    async fn handle_get_all(
        &self,
        query: GetAllFavoriteSourcesQuery,
    ) -> Result<Vec<FavoriteSource>, FavoriteSourceError> {
        self.repository.list(query.offset, query.limit).await
    }

    async fn count(&self) -> Result<i64, FavoriteSourceError> {
        self.repository.count().await
    }
}
