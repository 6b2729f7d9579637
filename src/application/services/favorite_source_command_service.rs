//! Write-side service for favorite sources.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::CreateFavoriteSourceCommand;
use crate::domain::entities::{FavoriteSource, NewFavoriteSource, is_valid_source};
use crate::domain::error::FavoriteSourceError;
use crate::domain::repositories::FavoriteSourceRepository;
use crate::infrastructure::cache::CacheService;

/// Longest accepted source value, in characters.
pub const MAX_SOURCE_LEN: usize = 255;

/// Handles state-mutating favorite source commands.
#[async_trait]
pub trait FavoriteSourceCommandService: Send + Sync {
    /// Creates a favorite source unless one with the same source exists.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteSourceError::InvalidInput`] if the source is blank, too long,
    /// or contains characters outside the source charset.
    /// Returns [`FavoriteSourceError::Duplicate`] if the source is already stored.
    /// Returns [`FavoriteSourceError::Storage`] on backend errors.
    async fn handle_create(
        &self,
        command: CreateFavoriteSourceCommand,
    ) -> Result<FavoriteSource, FavoriteSourceError>;
}

/// Repository-backed command service.
pub struct FavoriteSourceCommandServiceImpl<R: FavoriteSourceRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: FavoriteSourceRepository> FavoriteSourceCommandServiceImpl<R> {
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    fn normalize_source(source: &str) -> Result<String, FavoriteSourceError> {
        let source = source.trim();

        if source.is_empty() {
            return Err(FavoriteSourceError::InvalidInput(
                "source must not be blank".to_string(),
            ));
        }

        if source.chars().count() > MAX_SOURCE_LEN {
            return Err(FavoriteSourceError::InvalidInput(format!(
                "source must be at most {MAX_SOURCE_LEN} characters"
            )));
        }

        if !is_valid_source(source) {
            return Err(FavoriteSourceError::InvalidInput(
                "source may only contain letters, digits, '.', '_' and '-', starting alphanumeric"
                    .to_string(),
            ));
        }

        Ok(source.to_string())
    }
}

#[async_trait]
impl<R: FavoriteSourceRepository> FavoriteSourceCommandService
    for FavoriteSourceCommandServiceImpl<R>
{
    async fn handle_create(
        &self,
        command: CreateFavoriteSourceCommand,
    ) -> Result<FavoriteSource, FavoriteSourceError> {
        let source = Self::normalize_source(&command.source)?;

        if self.repository.find_by_source(&source).await?.is_some() {
            return Err(FavoriteSourceError::Duplicate { value: source });
        }

        // A concurrent insert can still win between the check and the insert;
        // the store's unique index reports it as Duplicate.
        let created = self
            .repository
            .create(NewFavoriteSource {
                source: source.clone(),
            })
            .await
            .map_err(|e| match e {
                FavoriteSourceError::Duplicate { .. } => FavoriteSourceError::Duplicate {
                    value: source.clone(),
                },
                other => other,
            })?;

        info!(id = created.id, source = %created.source, "Favorite source created");

        if let Err(e) = self.cache.set_favorite_source(&created, None).await {
            warn!("Failed to cache favorite source {}: {}", created.id, e);
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockFavoriteSourceRepository;
    use crate::infrastructure::cache::NullCache;

    fn service(
        mock_repo: MockFavoriteSourceRepository,
    ) -> FavoriteSourceCommandServiceImpl<MockFavoriteSourceRepository> {
        FavoriteSourceCommandServiceImpl::new(Arc::new(mock_repo), Arc::new(NullCache))
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_repo = MockFavoriteSourceRepository::new();

        mock_repo
            .expect_find_by_source()
            .withf(|source| source == "bbc.com")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|new_source| new_source.source == "bbc.com")
            .times(1)
            .returning(|new_source| Ok(FavoriteSource::new(1, new_source.source)));

        let result = service(mock_repo)
            .handle_create(CreateFavoriteSourceCommand::new("bbc.com"))
            .await;

        assert_eq!(result.unwrap(), FavoriteSource::new(1, "bbc.com".to_string()));
    }

    #[tokio::test]
    async fn test_create_trims_source() {
        let mut mock_repo = MockFavoriteSourceRepository::new();

        mock_repo
            .expect_find_by_source()
            .withf(|source| source == "cnn.com")
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|new_source| new_source.source == "cnn.com")
            .returning(|new_source| Ok(FavoriteSource::new(2, new_source.source)));

        let result = service(mock_repo)
            .handle_create(CreateFavoriteSourceCommand::new("  cnn.com  "))
            .await;

        assert_eq!(result.unwrap().source, "cnn.com");
    }

    #[tokio::test]
    async fn test_create_duplicate_does_not_insert() {
        let mut mock_repo = MockFavoriteSourceRepository::new();

        mock_repo
            .expect_find_by_source()
            .times(1)
            .returning(|_| Ok(Some(FavoriteSource::new(1, "bbc.com".to_string()))));
        mock_repo.expect_create().never();

        let result = service(mock_repo)
            .handle_create(CreateFavoriteSourceCommand::new("bbc.com"))
            .await;

        assert_eq!(
            result.unwrap_err(),
            FavoriteSourceError::Duplicate {
                value: "bbc.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_create_race_on_unique_index_is_duplicate() {
        let mut mock_repo = MockFavoriteSourceRepository::new();

        mock_repo.expect_find_by_source().returning(|_| Ok(None));
        mock_repo.expect_create().times(1).returning(|_| {
            Err(FavoriteSourceError::Duplicate {
                value: String::new(),
            })
        });

        let result = service(mock_repo)
            .handle_create(CreateFavoriteSourceCommand::new("bbc.com"))
            .await;

        assert_eq!(
            result.unwrap_err(),
            FavoriteSourceError::Duplicate {
                value: "bbc.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_create_blank_source_is_invalid() {
        let mock_repo = MockFavoriteSourceRepository::new();

        let result = service(mock_repo)
            .handle_create(CreateFavoriteSourceCommand::new("   "))
            .await;

        assert!(matches!(result, Err(FavoriteSourceError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_too_long_source_is_invalid() {
        let mock_repo = MockFavoriteSourceRepository::new();

        let result = service(mock_repo)
            .handle_create(CreateFavoriteSourceCommand::new("a".repeat(MAX_SOURCE_LEN + 1)))
            .await;

        assert!(matches!(result, Err(FavoriteSourceError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_characters_outside_charset() {
        let mut mock_repo = MockFavoriteSourceRepository::new();
        mock_repo.expect_find_by_source().never();
        mock_repo.expect_create().never();

        let service = service(mock_repo);

        for source in ["bbc news", "bbc/news", "-bbc", "ñews"] {
            let result = service
                .handle_create(CreateFavoriteSourceCommand::new(source))
                .await;

            assert!(
                matches!(result, Err(FavoriteSourceError::InvalidInput(_))),
                "{source:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_create_storage_error_is_not_duplicate() {
        let mut mock_repo = MockFavoriteSourceRepository::new();

        mock_repo.expect_find_by_source().returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .returning(|_| Err(FavoriteSourceError::Storage("disk full".to_string())));

        let result = service(mock_repo)
            .handle_create(CreateFavoriteSourceCommand::new("bbc.com"))
            .await;

        assert!(matches!(result, Err(FavoriteSourceError::Storage(_))));
    }
}
