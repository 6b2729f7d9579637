//! Handlers for the favorite sources endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{
        HeaderMap, StatusCode,
        header::{ACCEPT_LANGUAGE, LOCATION},
    },
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::favorite_source::{CreateFavoriteSourceResource, FavoriteSourceListResource};
use crate::api::dto::pagination::PaginationParams;
use crate::api::routes::favorite_source_location;
use crate::api::transform::{
    create_command_from_resource, get_all_query_from_page, list_resource_from_entities,
    resource_from_entity,
};
use crate::domain::error::FavoriteSourceError;
use crate::domain::queries::GetFavoriteSourceByIdQuery;
use crate::error::AppError;
use crate::infrastructure::i18n::{FAVORITE_SOURCE_DUPLICATED, negotiate_language};
use crate::state::AppState;

/// Retrieves a favorite source by its identifier.
///
/// # Endpoint
///
/// `GET /api/v1/favoritesources/{id}`
///
/// # Response Codes
///
/// - **200 OK**: `{"id": 1, "source": "bbc.com"}`
/// - **404 Not Found**: no favorite source has the id; the body is empty
/// - **400 Bad Request**: the id is not an integer (rejected by the extractor)
pub async fn get_favorite_source_by_id_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let query = GetFavoriteSourceByIdQuery::new(id);

    match state.query_service.handle_get_by_id(query).await {
        Ok(favorite) => Ok(Json(resource_from_entity(favorite)).into_response()),
        Err(FavoriteSourceError::NotFound { .. }) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Creates a new favorite source.
///
/// # Endpoint
///
/// `POST /api/v1/favoritesources`
///
/// # Request Body
///
/// ```json
/// { "source": "bbc.com" }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: body is the new resource, `Location` points at its
///   get-by-id URL
/// - **400 Bad Request**: the body failed validation
/// - **409 Conflict**: the source already exists; `error.message` is localized
///   from `Accept-Language`
/// - **500 Internal Server Error**: storage failure
pub async fn create_favorite_source_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(resource): Json<CreateFavoriteSourceResource>,
) -> Result<Response, AppError> {
    resource.validate()?;

    let command = create_command_from_resource(resource);

    match state.command_service.handle_create(command).await {
        Ok(created) => {
            let location = favorite_source_location(created.id);
            let body = resource_from_entity(created);

            Ok((StatusCode::CREATED, [(LOCATION, location)], Json(body)).into_response())
        }
        Err(FavoriteSourceError::Duplicate { value }) => {
            let accept_language = headers
                .get(ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok());
            let language = negotiate_language(
                state.messages.as_ref(),
                accept_language,
                &state.default_language,
            );
            let message = state.messages.lookup(FAVORITE_SOURCE_DUPLICATED, &language);

            tracing::info!(source = %value, "Rejected duplicate favorite source");

            Err(AppError::conflict(message, json!({ "source": value })))
        }
        Err(e) => Err(e.into()),
    }
}

/// Lists favorite sources ordered by id.
///
/// # Endpoint
///
/// `GET /api/v1/favoritesources?page=1&page_size=25`
///
/// # Errors
///
/// Returns 400 if pagination parameters are out of range.
pub async fn favorite_source_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<FavoriteSourceListResource>, AppError> {
    let page = params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let favorites = state
        .query_service
        .handle_get_all(get_all_query_from_page(page))
        .await?;

    Ok(Json(list_resource_from_entities(favorites, page)))
}
