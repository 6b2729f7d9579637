//! In-memory implementation of the favorite source repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{FavoriteSource, NewFavoriteSource};
use crate::domain::error::FavoriteSourceError;
use crate::domain::repositories::FavoriteSourceRepository;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    rows: Vec<FavoriteSource>,
}

/// Process-local repository backed by a vector under an async lock.
///
/// Ids start at 1 and increase by one per insert. The duplicate check and the
/// insert run under the same write lock, so concurrent creates of one source
/// leave exactly one row.
#[derive(Debug, Default)]
pub struct InMemoryFavoriteSourceRepository {
    store: RwLock<Store>,
}

impl InMemoryFavoriteSourceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteSourceRepository for InMemoryFavoriteSourceRepository {
    async fn create(
        &self,
        new_source: NewFavoriteSource,
    ) -> Result<FavoriteSource, FavoriteSourceError> {
        let mut store = self.store.write().await;

        if store.rows.iter().any(|s| s.has_source(&new_source.source)) {
            return Err(FavoriteSourceError::Duplicate {
                value: new_source.source,
            });
        }

        store.next_id += 1;
        let created = FavoriteSource::new(store.next_id, new_source.source);
        store.rows.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FavoriteSource>, FavoriteSourceError> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_source(
        &self,
        source: &str,
    ) -> Result<Option<FavoriteSource>, FavoriteSourceError> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|s| s.has_source(source)).cloned())
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FavoriteSource>, FavoriteSourceError> {
        let store = self.store.read().await;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        // Rows are appended in id order.
        Ok(store.rows.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<i64, FavoriteSourceError> {
        let store = self.store.read().await;
        Ok(store.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_source(source: &str) -> NewFavoriteSource {
        NewFavoriteSource {
            source: source.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryFavoriteSourceRepository::new();

        let first = repo.create(new_source("bbc.com")).await.unwrap();
        let second = repo.create(new_source("cnn.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_rejected() {
        let repo = InMemoryFavoriteSourceRepository::new();
        repo.create(new_source("bbc.com")).await.unwrap();

        let result = repo.create(new_source("BBC.COM")).await;

        assert!(matches!(result, Err(FavoriteSourceError::Duplicate { .. })));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_and_source() {
        let repo = InMemoryFavoriteSourceRepository::new();
        let created = repo.create(new_source("reuters")).await.unwrap();

        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repo.find_by_source("Reuters").await.unwrap(), Some(created));
        assert!(repo.find_by_id(999).await.unwrap().is_none());
        assert!(repo.find_by_source("ap").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pages_in_id_order() {
        let repo = InMemoryFavoriteSourceRepository::new();
        for name in ["a.com", "b.com", "c.com"] {
            repo.create(new_source(name)).await.unwrap();
        }

        let page = repo.list(1, 5).await.unwrap();

        let ids: Vec<i64> = page.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_creates_leave_one_row() {
        let repo = Arc::new(InMemoryFavoriteSourceRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_source("bbc.com")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
