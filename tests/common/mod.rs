#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use favorite_sources::api::routes::favorite_source_routes;
use favorite_sources::application::services::{
    FavoriteSourceCommandServiceImpl, FavoriteSourceQueryServiceImpl,
};
use favorite_sources::domain::entities::{FavoriteSource, NewFavoriteSource};
use favorite_sources::domain::error::FavoriteSourceError;
use favorite_sources::domain::repositories::FavoriteSourceRepository;
use favorite_sources::infrastructure::cache::NullCache;
use favorite_sources::infrastructure::i18n::StaticMessageCatalog;
use favorite_sources::infrastructure::persistence::InMemoryFavoriteSourceRepository;
use favorite_sources::state::AppState;
use std::sync::Arc;

pub fn state_with_repository<R>(repository: Arc<R>) -> AppState
where
    R: FavoriteSourceRepository + 'static,
{
    let cache = Arc::new(NullCache::new());

    AppState::new(
        Arc::new(FavoriteSourceQueryServiceImpl::new(
            repository.clone(),
            cache.clone(),
        )),
        Arc::new(FavoriteSourceCommandServiceImpl::new(
            repository,
            cache.clone(),
        )),
        Arc::new(StaticMessageCatalog::new("en")),
        cache,
    )
}

pub fn create_test_state() -> (AppState, Arc<InMemoryFavoriteSourceRepository>) {
    let repository = Arc::new(InMemoryFavoriteSourceRepository::new());
    (state_with_repository(repository.clone()), repository)
}

pub fn make_server(state: AppState) -> TestServer {
    let app = favorite_source_routes().with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn seed(repository: &InMemoryFavoriteSourceRepository, source: &str) -> FavoriteSource {
    repository
        .create(NewFavoriteSource {
            source: source.to_string(),
        })
        .await
        .unwrap()
}

/// Repository whose every call fails as if the database were gone.
pub struct FailingRepository;

fn unavailable() -> FavoriteSourceError {
    FavoriteSourceError::Storage("connection refused".to_string())
}

#[async_trait]
impl FavoriteSourceRepository for FailingRepository {
    async fn create(&self, _new: NewFavoriteSource) -> Result<FavoriteSource, FavoriteSourceError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<FavoriteSource>, FavoriteSourceError> {
        Err(unavailable())
    }

    async fn find_by_source(
        &self,
        _source: &str,
    ) -> Result<Option<FavoriteSource>, FavoriteSourceError> {
        Err(unavailable())
    }

    async fn list(
        &self,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<FavoriteSource>, FavoriteSourceError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, FavoriteSourceError> {
        Err(unavailable())
    }
}
