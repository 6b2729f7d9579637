//! Failure reasons for favorite source operations.
//!
//! Callers match on the variant instead of parsing messages: a missing entity,
//! a duplicate source, rejected input, and a storage failure are all distinct.

use thiserror::Error;

/// Unique index guarding the `source` column.
pub const SOURCE_UNIQUE_CONSTRAINT: &str = "favorite_sources_source_key";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FavoriteSourceError {
    #[error("favorite source {id} not found")]
    NotFound { id: i64 },

    #[error("favorite source '{value}' already exists")]
    Duplicate { value: String },

    #[error("invalid favorite source: {0}")]
    InvalidInput(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for FavoriteSourceError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
            && matches!(db.constraint(), Some(SOURCE_UNIQUE_CONSTRAINT) | None)
        {
            // The caller knows which source it tried to insert and fills it in.
            return Self::Duplicate {
                value: String::new(),
            };
        }

        Self::Storage(e.to_string())
    }
}
