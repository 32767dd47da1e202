//! Category service against a mock backend: paths, query strings,
//! auth headers and the status-to-error mapping.

mod common;

use blue_margarita::api::{
    CategoryFilters, CategoryInsert, CategoryService, CategoryUpdate, ServiceError,
};
use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, page_json, TEST_TOKEN};
use serde_json::json;

const RINGS: &str = r#"{"categoryId":3,"name":"Rings","createdAt":"2024-05-01T10:15:00","isActive":true}"#;

async fn service() -> (MockBackend, CategoryService, std::sync::Arc<blue_margarita::auth::TokenAuth>) {
    let backend = MockBackend::start().await;
    let (client, auth) = client_for(&backend.base_url());
    (backend, CategoryService::new(client), auth)
}

#[tokio::test]
async fn test_filtered_listing_strips_empty_fields() {
    let (backend, service, _) = service().await;
    backend
        .enqueue_response(MockResponse::json(&page_json(&[json!({"categoryId": 3, "name": "Rings", "isActive": true})], 0, 1, 1)))
        .await;

    let filters = CategoryFilters {
        name: Some(String::new()),
        is_active: Some(true),
        page: Some(0),
        ..Default::default()
    };
    let listing = service.get_categories_filtered_paginated(&filters).await.unwrap();

    assert_eq!(listing.total_elements, 1);
    assert_eq!(listing.data[0].name, "Rings");

    let req = backend.last_request().await;
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/categories");
    assert_eq!(req.query.as_deref(), Some("isActive=true&page=0"));
}

#[tokio::test]
async fn test_requests_carry_bearer_token_and_request_id() {
    let (backend, service, _) = service().await;
    backend.enqueue_response(MockResponse::json(RINGS)).await;

    let category = service.get_category(3).await.unwrap();
    assert_eq!(category.category_id, 3);
    assert!(category.created_at.is_some());

    let req = backend.last_request().await;
    assert_eq!(req.path, "/api/categories/3");
    assert_eq!(req.query, None);
    assert_eq!(req.header("authorization"), Some(format!("Bearer {}", TEST_TOKEN).as_str()));
    assert!(req.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_create_sends_json_body() {
    let (backend, service, _) = service().await;
    backend.enqueue_response(MockResponse::status(201, RINGS)).await;

    let created = service
        .create_category(&CategoryInsert { name: "Rings".into() })
        .await
        .unwrap();
    assert_eq!(created.name, "Rings");

    let req = backend.last_request().await;
    assert_eq!(req.method, "POST");
    assert_eq!(req.json(), json!({"name": "Rings"}));
    assert_eq!(req.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_create_conflict_reports_duplicate_name() {
    let (backend, service, _) = service().await;
    backend
        .enqueue_response(MockResponse::status(409, r#"{"message":"duplicate"}"#))
        .await;

    let err = service
        .create_category(&CategoryInsert { name: "Rings".into() })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict { .. }));
    assert_eq!(err.to_string(), "Category with name already exists");
}

#[tokio::test]
async fn test_update_missing_category_is_not_found() {
    let (backend, service, _) = service().await;
    backend.enqueue_response(MockResponse::status(404, "")).await;

    let err = service
        .update_category(&CategoryUpdate {
            category_id: 99,
            name: "Bracelets".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { .. }));
    assert_eq!(err.to_string(), "Category not found");

    let req = backend.last_request().await;
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/api/categories/99");
    assert_eq!(req.json(), json!({"categoryId": 99, "name": "Bracelets"}));
}

#[tokio::test]
async fn test_unauthorized_expires_session() {
    let (backend, service, auth) = service().await;
    backend.enqueue_response(MockResponse::status(401, "")).await;
    backend.enqueue_response(MockResponse::json("[]")).await;

    let err = service.get_category(3).await.unwrap_err();
    assert!(err.is_auth_failure());
    assert_eq!(err.to_string(), "Authentication failed - please log in again");
    assert!(auth.is_expired());

    // The rejected token is not sent again.
    service.get_categories_for_dropdown().await.unwrap();
    let req = backend.last_request().await;
    assert_eq!(req.header("authorization"), None);
}

#[tokio::test]
async fn test_delete_forbidden_requires_admin() {
    let (backend, service, _) = service().await;
    backend.enqueue_response(MockResponse::status(403, "")).await;

    let err = service.delete_category(3).await.unwrap_err();

    assert!(matches!(err, ServiceError::AccessDenied { .. }));
    assert!(err.to_string().contains("ADMIN"));
    let req = backend.last_request().await;
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/categories/3");
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let (backend, service, _) = service().await;
    backend.enqueue_response(MockResponse::no_content()).await;

    service.delete_category(3).await.unwrap();
}

#[tokio::test]
async fn test_validation_error_keeps_field_messages() {
    let (backend, service, _) = service().await;
    backend
        .enqueue_response(MockResponse::status(400, r#"{"name":"must not be blank"}"#))
        .await;

    let err = service
        .create_category(&CategoryInsert { name: " ".into() })
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation { field_errors, .. } => {
            assert_eq!(field_errors.get("name").map(String::as_str), Some("must not be blank"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_other_status_is_generic() {
    let (backend, service, _) = service().await;
    backend.enqueue_response(MockResponse::status(500, "boom")).await;

    let err = service.get_category_details(3).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Failed to get category detailed view: 500");
    assert_eq!(backend.last_request().await.path, "/api/categories/3/details");
}

#[tokio::test]
async fn test_dropdown_and_details_decode() {
    let (backend, service, _) = service().await;
    backend
        .enqueue_response(MockResponse::json(r#"[{"id":1,"name":"Rings"},{"id":2,"name":"Earrings"}]"#))
        .await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"categoryId":1,"name":"Rings","isActive":true,"totalProducts":12,"totalRevenue":1520.5}"#,
        ))
        .await;

    let options = service.get_categories_for_dropdown().await.unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(backend.last_request().await.path, "/api/categories/dropdown");

    let details = service.get_category_details(1).await.unwrap();
    assert_eq!(details.total_products, 12);
    assert_eq!(details.total_revenue, Some(1520.5));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (backend, service, _) = service().await;
    backend.enqueue_response(MockResponse::json(r#"{"unexpected":true}"#)).await;

    let err = service.get_category(3).await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let (client, _) = client_for(&format!("http://127.0.0.1:{}", port));
    let service = CategoryService::new(client);

    let err = service.get_category(3).await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport { .. }));
    assert_eq!(err.status(), None);
}
