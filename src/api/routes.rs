//! API route configuration.

use crate::api::handlers::{
    create_favorite_source_handler, favorite_source_list_handler,
    get_favorite_source_by_id_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Base path of the favorite sources resource.
pub const FAVORITE_SOURCES_PATH: &str = "/api/v1/favoritesources";

/// URL of a single favorite source, used for the `Location` header.
pub fn favorite_source_location(id: i64) -> String {
    format!("{FAVORITE_SOURCES_PATH}/{id}")
}

/// Favorite sources routes.
///
/// # Endpoints
///
/// - `GET  /api/v1/favoritesources`        - List favorite sources (paginated)
/// - `POST /api/v1/favoritesources`        - Create a favorite source
/// - `GET  /api/v1/favoritesources/{id}`   - Get a favorite source by id
pub fn favorite_source_routes() -> Router<AppState> {
    Router::new()
        .route(
            FAVORITE_SOURCES_PATH,
            get(favorite_source_list_handler).post(create_favorite_source_handler),
        )
        .route(
            "/api/v1/favoritesources/{id}",
            get(get_favorite_source_by_id_handler),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_points_at_get_by_id() {
        assert_eq!(favorite_source_location(1), "/api/v1/favoritesources/1");
        assert_eq!(favorite_source_location(42), "/api/v1/favoritesources/42");
    }
}
