//! Tests for the HTTP surface
//!
//! These tests drive the router in-process and verify:
//! - Status codes and bodies for every route
//! - Filter semantics through query parameters
//! - Identity preservation on PUT
//! - Plain-text 404/500 messages
//! - Static files and the API document

use std::fs;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use cadastro::storage::MemoryStore;
use cadastro::{http, Config, IdStrategy, Registry};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_app() -> (TempDir, Router) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("data").join("users.json"))
        .build();
    let registry = Arc::new(Registry::open(&config).unwrap());
    (temp_dir, http::router(registry, None))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => request
            .header("content-type", "application/json")
            .body(Body::from(value.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, text) = send(app, Method::POST, "/cadastros/", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_str(&text).unwrap()
}

fn json_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

// =============================================================================
// Create / Get Tests
// =============================================================================

#[tokio::test]
async fn test_post_assigns_sequential_ids() {
    let (_temp, app) = setup_temp_app();

    for expected in ["1", "2", "3"] {
        let created = create(&app, json!({"name": "Ana"})).await;
        assert_eq!(created["id"], expected);
    }
}

#[tokio::test]
async fn test_post_without_trailing_slash() {
    let (_temp, app) = setup_temp_app();

    let (status, text) = send(&app, Method::POST, "/cadastros", Some(json!({"name": "Bia"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json_body(&text), json!({"name": "Bia", "id": "1"}));
}

#[tokio::test]
async fn test_post_with_empty_body() {
    let (_temp, app) = setup_temp_app();

    let (status, text) = send(&app, Method::POST, "/cadastros/", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json_body(&text), json!({"id": "1"}));
}

#[tokio::test]
async fn test_post_with_malformed_body_is_bad_request() {
    let (_temp, app) = setup_temp_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/cadastros/")
        .body(Body::from("{oops"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_by_id_round_trip() {
    let (_temp, app) = setup_temp_app();
    let created = create(&app, json!({"name": "Ana", "level": "admin", "idade": 31})).await;

    let (status, text) = send(&app, Method::GET, "/cadastros/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&text), created);
}

#[tokio::test]
async fn test_get_by_id_missing_is_404_with_message() {
    let (_temp, app) = setup_temp_app();

    let (status, text) = send(&app, Method::GET, "/cadastros/77", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "Usuário com ID 77 não encontrado.");
}

#[tokio::test]
async fn test_id_collision_after_delete() {
    let (_temp, app) = setup_temp_app();
    for name in ["a", "b", "c"] {
        create(&app, json!({ "name": name })).await;
    }

    let (status, _) = send(&app, Method::DELETE, "/cadastros/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let created = create(&app, json!({"name": "d"})).await;
    assert_eq!(created["id"], "3");

    let (_, text) = send(&app, Method::GET, "/cadastros/?id=3", None).await;
    assert_eq!(json_body(&text).as_array().unwrap().len(), 2);
}

// =============================================================================
// List / Filter Tests
// =============================================================================

#[tokio::test]
async fn test_list_all_preserves_order() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana"})).await;
    create(&app, json!({"name": "Bia"})).await;

    let (status, text) = send(&app, Method::GET, "/cadastros/", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = json_body(&text)
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ana", "Bia"]);
}

#[tokio::test]
async fn test_filter_name_and_level() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana", "level": "admin"})).await;
    create(&app, json!({"name": "Ana", "level": "user"})).await;

    let (status, text) = send(&app, Method::GET, "/cadastros/?name=ana&level=ADMIN", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&text),
        json!([{"name": "Ana", "level": "admin", "id": "1"}])
    );
}

#[tokio::test]
async fn test_filter_id_takes_precedence() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana"})).await;

    let (status, text) = send(&app, Method::GET, "/cadastros/?id=1&name=zzz", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&text)[0]["id"], "1");
}

#[tokio::test]
async fn test_filter_without_matches_is_404() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana"})).await;

    let (status, text) = send(&app, Method::GET, "/cadastros/?name=doesnotexist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "Nenhum usuário encontrado com os filtros especificados.");
}

#[tokio::test]
async fn test_filter_with_encoded_value() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana Maria"})).await;

    let (status, _) = send(&app, Method::GET, "/cadastros/?name=ana%20m", None).await;

    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Update / Delete Tests
// =============================================================================

#[tokio::test]
async fn test_put_preserves_identity() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana"})).await;

    let (status, text) = send(
        &app,
        Method::PUT,
        "/cadastros/1",
        Some(json!({"id": "999", "level": "admin"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&text), json!({"name": "Ana", "id": "1", "level": "admin"}));

    let (status, text) = send(&app, Method::GET, "/cadastros/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&text)["level"], "admin");

    let (status, _) = send(&app, Method::GET, "/cadastros/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_record_routes_accept_trailing_slash() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana"})).await;

    let (status, text) = send(&app, Method::GET, "/cadastros/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&text)["name"], "Ana");

    let (status, text) = send(&app, Method::PUT, "/cadastros/1/", Some(json!({"level": "user"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&text)["level"], "user");

    let (status, _) = send(&app, Method::DELETE, "/cadastros/1/", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, text) = send(&app, Method::GET, "/cadastros/1/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "Usuário com ID 1 não encontrado.");
}

#[tokio::test]
async fn test_put_missing_is_404() {
    let (_temp, app) = setup_temp_app();

    let (status, text) = send(&app, Method::PUT, "/cadastros/5", Some(json!({"name": "x"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(text.contains('5'));
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana"})).await;

    let (status, text) = send(&app, Method::DELETE, "/cadastros/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(text.is_empty());

    let (status, _) = send(&app, Method::GET, "/cadastros/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_is_404() {
    let (_temp, app) = setup_temp_app();

    let (status, text) = send(&app, Method::DELETE, "/cadastros/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "Usuário com ID 1 não encontrado.");
}

// =============================================================================
// Failure Tests
// =============================================================================

#[tokio::test]
async fn test_storage_failure_is_500() {
    let store = Arc::new(MemoryStore::new());
    let registry = Arc::new(Registry::new(Arc::clone(&store), IdStrategy::Sequential));
    let app = http::router(registry, None);
    store.fail_reads(true);

    let (status, _) = send(&app, Method::GET, "/cadastros/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    store.fail_reads(false);
    store.fail_writes(true);
    let (status, _) = send(&app, Method::POST, "/cadastros/", Some(json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_corrupt_file_is_500_not_crash() {
    let (temp, app) = setup_temp_app();
    fs::write(temp.path().join("data").join("users.json"), "garbage").unwrap();

    let (status, _) = send(&app, Method::GET, "/cadastros/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // Server keeps answering
    let (status, _) = send(&app, Method::GET, "/api-docs", None).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Docs / Static Tests
// =============================================================================

#[tokio::test]
async fn test_api_docs_document() {
    let (_temp, app) = setup_temp_app();

    let (status, text) = send(&app, Method::GET, "/api-docs", None).await;

    assert_eq!(status, StatusCode::OK);
    let doc = json_body(&text);
    assert_eq!(doc["openapi"], "3.0.0");
    assert!(doc["paths"]["/cadastros/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn test_every_documented_route_is_routed() {
    let (_temp, app) = setup_temp_app();
    create(&app, json!({"name": "Ana"})).await;

    for route in http::ROUTES {
        let method = Method::from_bytes(route.method.to_uppercase().as_bytes()).unwrap();
        let uri = route.path.replace("{id}", "1");
        let body = route.has_body.then(|| json!({"name": "Bia"}));

        let (status, _) = send(&app, method, &uri, body).await;

        assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", route.method, uri);
        assert!(status.is_success(), "{} {} -> {}", route.method, uri, status);
    }
}

#[tokio::test]
async fn test_post_array_body_is_bad_request() {
    let (_temp, app) = setup_temp_app();

    let (status, _) = send(&app, Method::POST, "/cadastros/", Some(json!([1, 2]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let temp_dir = TempDir::new().unwrap();
    let public = temp_dir.path().join("public");
    fs::create_dir_all(&public).unwrap();
    fs::write(public.join("index.html"), "<h1>Cadastros</h1>").unwrap();

    let registry = Arc::new(Registry::new(MemoryStore::new(), IdStrategy::Sequential));
    let app = http::router(registry, Some(public));

    let (status, text) = send(&app, Method::GET, "/index.html", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("Cadastros"));

    let (status, _) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
}
