//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{FavoriteSourceCommandService, FavoriteSourceQueryService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::i18n::{DEFAULT_LANGUAGE, MessageCatalog};

/// Handles to the services the HTTP layer talks to.
///
/// Everything is behind `Arc<dyn Trait>`, so the state is cheap to clone per
/// request and any implementation can be wired in at startup or in tests.
#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<dyn FavoriteSourceQueryService>,
    pub command_service: Arc<dyn FavoriteSourceCommandService>,
    pub messages: Arc<dyn MessageCatalog>,
    pub cache: Arc<dyn CacheService>,
    /// Language used when `Accept-Language` names nothing the catalog supports.
    pub default_language: String,
}

impl AppState {
    pub fn new(
        query_service: Arc<dyn FavoriteSourceQueryService>,
        command_service: Arc<dyn FavoriteSourceCommandService>,
        messages: Arc<dyn MessageCatalog>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            query_service,
            command_service,
            messages,
            cache,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }
}
