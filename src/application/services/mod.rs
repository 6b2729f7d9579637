//! Command and query services for favorite sources.

pub mod favorite_source_command_service;
pub mod favorite_source_query_service;

pub use favorite_source_command_service::{
    FavoriteSourceCommandService, FavoriteSourceCommandServiceImpl,
};
pub use favorite_source_query_service::{
    FavoriteSourceQueryService, FavoriteSourceQueryServiceImpl,
};
