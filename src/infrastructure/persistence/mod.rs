//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgFavoriteSourceRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryFavoriteSourceRepository`] - Process-local storage, used when
//!   `STORAGE_BACKEND=memory` and by the HTTP integration tests

pub mod memory_favorite_source_repository;
pub mod pg_favorite_source_repository;

pub use memory_favorite_source_repository::InMemoryFavoriteSourceRepository;
pub use pg_favorite_source_repository::PgFavoriteSourceRepository;
