//! Repository trait for favorite source data access.

use crate::domain::entities::{FavoriteSource, NewFavoriteSource};
use crate::domain::error::FavoriteSourceError;
use async_trait::async_trait;

/// Repository interface for storing favorite sources.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFavoriteSourceRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryFavoriteSourceRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_favorite_source.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteSourceRepository: Send + Sync {
    /// Inserts a new favorite source and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::Duplicate`] if the source is already stored.
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn create(&self, new_source: NewFavoriteSource)
    -> Result<FavoriteSource, FavoriteSourceError>;

    /// Finds a favorite source by id.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<FavoriteSource>, FavoriteSourceError>;

    /// Finds a favorite source by its source value, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn find_by_source(
        &self,
        source: &str,
    ) -> Result<Option<FavoriteSource>, FavoriteSourceError>;

    /// Lists favorite sources ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn list(&self, offset: i64, limit: i64)
    -> Result<Vec<FavoriteSource>, FavoriteSourceError>;

    /// Counts stored favorite sources.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn count(&self) -> Result<i64, FavoriteSourceError>;
}
