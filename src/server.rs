//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, database connections, cache setup, service
//! wiring, and the Axum server lifecycle.

use crate::application::services::{
    FavoriteSourceCommandServiceImpl, FavoriteSourceQueryServiceImpl,
};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::FavoriteSourceRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::i18n::StaticMessageCatalog;
use crate::infrastructure::persistence::{
    InMemoryFavoriteSourceRepository, PgFavoriteSourceRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Favorite source storage (PostgreSQL with migrations, or in-memory)
/// - Redis cache (or NullCache fallback)
/// - Command and query services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = connect_cache(&config).await;

    let state = match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_database(&config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            let repository = Arc::new(PgFavoriteSourceRepository::new(Arc::new(pool)));
            build_state(repository, cache, &config)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; favorite sources are lost on restart");
            build_state(
                Arc::new(InMemoryFavoriteSourceRepository::new()),
                cache,
                &config,
            )
        }
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wires repository, cache, and message catalog into the handler state.
pub fn build_state<R>(repository: Arc<R>, cache: Arc<dyn CacheService>, config: &Config) -> AppState
where
    R: FavoriteSourceRepository + 'static,
{
    let query_service = Arc::new(FavoriteSourceQueryServiceImpl::new(
        repository.clone(),
        cache.clone(),
    ));
    let command_service = Arc::new(FavoriteSourceCommandServiceImpl::new(
        repository,
        cache.clone(),
    ));
    let messages = Arc::new(StaticMessageCatalog::new(config.default_language.clone()));
    let default_language = messages.default_language().to_string();

    AppState::new(query_service, command_service, messages, cache)
        .with_default_language(default_language)
}

/// Connects to PostgreSQL, retrying with exponential backoff.
async fn connect_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres storage backend")?;

    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_attempts.saturating_sub(1));

    let pool = Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!("Database connection attempt failed: {}", e);
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Connects to Redis when caching is enabled, falling back to [`NullCache`].
async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let redis_url = match &config.redis_url {
        Some(redis_url) if config.is_cache_enabled() => redis_url,
        Some(_) => {
            tracing::warn!(
                "REDIS_URL ignored: cache disabled for {} storage (NullCache)",
                config.storage_backend
            );
            return Arc::new(NullCache::new());
        }
        None => {
            tracing::info!("Cache disabled (NullCache)");
            return Arc::new(NullCache::new());
        }
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
