//! Application layer services implementing business logic.
//!
//! This layer executes commands and queries by coordinating repository calls,
//! validation, and caching. HTTP handlers depend on the service traits only.
//!
//! # Available Services
//!
//! - [`services::FavoriteSourceQueryService`] - Read-only favorite source lookups
//! - [`services::FavoriteSourceCommandService`] - Favorite source creation

pub mod services;
