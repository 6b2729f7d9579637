//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching, and localized
//! messages.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`i18n`] - Message catalog for user-facing text
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod cache;
pub mod i18n;
pub mod persistence;
