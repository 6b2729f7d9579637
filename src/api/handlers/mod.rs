//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod favorite_sources;
pub mod health;

pub use favorite_sources::{
    create_favorite_source_handler, favorite_source_list_handler,
    get_favorite_source_by_id_handler,
};
pub use health::health_handler;
