//! Core domain entities.
//!
//! - [`FavoriteSource`] - A news source a user marked for prioritized retrieval
//! - [`NewFavoriteSource`] - Insertion shape handed to the repository

pub mod favorite_source;

pub use favorite_source::{FavoriteSource, NewFavoriteSource, SOURCE_REGEX, is_valid_source};
