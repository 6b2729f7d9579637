mod common;

use axum::http::{StatusCode, header};
use favorite_sources::domain::repositories::FavoriteSourceRepository;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_create_returns_created_with_location() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "bbc.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.header(header::LOCATION),
        "/api/v1/favoritesources/1"
    );

    let json = response.json::<serde_json::Value>();
    assert_eq!(json, json!({ "id": 1, "source": "bbc.com" }));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let created = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "reuters" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let location = created.header(header::LOCATION);
    let location = location.to_str().unwrap();

    let response = server.get(location).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), created.json::<serde_json::Value>());
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let first = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "bbc.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "cnn.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_duplicate_returns_conflict() {
    let (state, repo) = common::create_test_state();
    common::seed(&repo, "bbc.com").await;
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "bbc.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(
        json["error"]["message"],
        "A favorite source with the same source already exists."
    );
    assert_eq!(json["error"]["details"]["source"], "bbc.com");

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_duplicate_ignores_case() {
    let (state, repo) = common::create_test_state();
    common::seed(&repo, "bbc.com").await;
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "BBC.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_duplicate_message_follows_accept_language() {
    let (state, repo) = common::create_test_state();
    common::seed(&repo, "bbc.com").await;
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .add_header(header::ACCEPT_LANGUAGE, "es-ES,es;q=0.9,en;q=0.5")
        .json(&json!({ "source": "bbc.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "Ya existe una fuente favorita con el mismo origen."
    );
}

#[tokio::test]
async fn test_create_duplicate_unsupported_language_falls_back() {
    let (state, repo) = common::create_test_state();
    common::seed(&repo, "bbc.com").await;
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .add_header(header::ACCEPT_LANGUAGE, "fr-FR")
        .json(&json!({ "source": "bbc.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "A favorite source with the same source already exists."
    );
}

#[tokio::test]
async fn test_create_invalid_source_returns_bad_request() {
    let (state, repo) = common::create_test_state();
    let server = common::make_server(state);

    for source in ["", "bbc news", "-bbc"] {
        let response = server
            .post("/api/v1/favoritesources")
            .json(&json!({ "source": source }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_stores_trimmed_source() {
    let (state, repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "  bbc.com " }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "bbc.com");
    assert!(repo.find_by_source("bbc.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_unknown_field_is_rejected() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "bbc.com", "id": 5 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_storage_failure_is_internal_error() {
    let state = common::state_with_repository(Arc::new(common::FailingRepository));
    let server = common::make_server(state);

    let response = server
        .post("/api/v1/favoritesources")
        .json(&json!({ "source": "bbc.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert!(!json.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_get_by_id_success() {
    let (state, repo) = common::create_test_state();
    let seeded = common::seed(&repo, "the-verge").await;
    let server = common::make_server(state);

    let response = server
        .get(&format!("/api/v1/favoritesources/{}", seeded.id))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json, json!({ "id": seeded.id, "source": "the-verge" }));
}

#[tokio::test]
async fn test_get_by_id_missing_is_empty_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/api/v1/favoritesources/999").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_get_by_negative_id_is_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/api/v1/favoritesources/-1").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_get_by_non_integer_id_is_bad_request() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/api/v1/favoritesources/abc").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_get_by_id_storage_failure_is_internal_error() {
    let state = common::state_with_repository(Arc::new(common::FailingRepository));
    let server = common::make_server(state);

    let response = server.get("/api/v1/favoritesources/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_list_paginates_in_id_order() {
    let (state, repo) = common::create_test_state();
    for source in ["a.com", "b.com", "c.com"] {
        common::seed(&repo, source).await;
    }
    let server = common::make_server(state);

    let response = server
        .get("/api/v1/favoritesources")
        .add_query_param("page", 2)
        .add_query_param("page_size", 2)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["page"], 2);
    assert_eq!(json["page_size"], 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["source"], "c.com");
}

#[tokio::test]
async fn test_list_defaults() {
    let (state, repo) = common::create_test_state();
    common::seed(&repo, "bbc.com").await;
    let server = common::make_server(state);

    let response = server.get("/api/v1/favoritesources").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 25);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_rejects_oversized_page() {
    let (state, _repo) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .get("/api/v1/favoritesources")
        .add_query_param("page_size", 1000)
        .await;

    response.assert_status_bad_request();
}
