//! PostgreSQL implementation of the favorite source repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{FavoriteSource, NewFavoriteSource};
use crate::domain::error::FavoriteSourceError;
use crate::domain::repositories::FavoriteSourceRepository;

#[derive(Debug, FromRow)]
struct FavoriteSourceRow {
    id: i64,
    source: String,
}

impl From<FavoriteSourceRow> for FavoriteSource {
    fn from(row: FavoriteSourceRow) -> Self {
        FavoriteSource::new(row.id, row.source)
    }
}

/// PostgreSQL repository for favorite sources.
///
/// Uniqueness of `source` is enforced by the `favorite_sources_source_key`
/// index on `lower(source)`; a violation surfaces as
/// [`FavoriteSourceError::Duplicate`].
pub struct PgFavoriteSourceRepository {
    pool: Arc<PgPool>,
}

impl PgFavoriteSourceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteSourceRepository for PgFavoriteSourceRepository {
    async fn create(
        &self,
        new_source: NewFavoriteSource,
    ) -> Result<FavoriteSource, FavoriteSourceError> {
        let row = sqlx::query_as::<_, FavoriteSourceRow>(
            r#"
            INSERT INTO favorite_sources (source)
            VALUES ($1)
            RETURNING id, source
            "#,
        )
        .bind(&new_source.source)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match FavoriteSourceError::from(e) {
            FavoriteSourceError::Duplicate { .. } => FavoriteSourceError::Duplicate {
                value: new_source.source.clone(),
            },
            other => other,
        })?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FavoriteSource>, FavoriteSourceError> {
        let row = sqlx::query_as::<_, FavoriteSourceRow>(
            r#"
            SELECT id, source
            FROM favorite_sources
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_source(
        &self,
        source: &str,
    ) -> Result<Option<FavoriteSource>, FavoriteSourceError> {
        let row = sqlx::query_as::<_, FavoriteSourceRow>(
            r#"
            SELECT id, source
            FROM favorite_sources
            WHERE lower(source) = lower($1)
            "#,
        )
        .bind(source)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FavoriteSource>, FavoriteSourceError> {
        let rows = sqlx::query_as::<_, FavoriteSourceRow>(
            r#"
            SELECT id, source
            FROM favorite_sources
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, FavoriteSourceError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorite_sources")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
