//! Location and customer services, and the customer form submitting
//! through the service.

mod common;

use blue_margarita::api::{
    CustomerFilters, CustomerService, LocationFilters, LocationService, LocationUpdate,
    ServiceError,
};
use blue_margarita::ui::forms::{CustomerField, CustomerForm};
use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, page_json};
use serde_json::json;

#[tokio::test]
async fn test_location_update_and_listing() {
    let backend = MockBackend::start().await;
    let (client, _) = client_for(&backend.base_url());
    let service = LocationService::new(client);

    backend
        .enqueue_response(MockResponse::json(r#"{"locationId":4,"name":"Syntagma stall","isActive":true}"#))
        .await;
    let updated = service
        .update_location(&LocationUpdate {
            location_id: 4,
            name: "Syntagma stall".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.location_id, 4);
    let req = backend.last_request().await;
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/api/locations/4"));

    backend
        .enqueue_response(MockResponse::json(&page_json(
            &[json!({"locationId": 4, "name": "Syntagma stall", "isActive": true})],
            0,
            1,
            1,
        )))
        .await;
    let filters = LocationFilters {
        name: Some("synt".into()),
        is_active: None,
        ..Default::default()
    };
    let listing = service.get_locations_filtered_paginated(&filters).await.unwrap();
    assert_eq!(listing.data.len(), 1);
    assert_eq!(backend.last_request().await.query.as_deref(), Some("name=synt"));
}

#[tokio::test]
async fn test_location_duplicate_name() {
    let backend = MockBackend::start().await;
    let (client, _) = client_for(&backend.base_url());
    let service = LocationService::new(client);
    backend.enqueue_response(MockResponse::status(409, "")).await;

    let err = service.get_locations_for_dropdown().await.unwrap_err();
    assert_eq!(err.to_string(), "Location with name already exists");
    assert_eq!(backend.last_request().await.path, "/api/locations/dropdown");
}

#[tokio::test]
async fn test_customer_form_submits_clean_payload() {
    let backend = MockBackend::start().await;
    let (client, _) = client_for(&backend.base_url());
    let service = CustomerService::new(client);
    backend
        .enqueue_response(MockResponse::status(
            201,
            r#"{"customerId":9,"firstname":"Maria","lastname":"Papadopoulou","gender":"FEMALE","isActive":true}"#,
        ))
        .await;

    let mut form = CustomerForm::new();
    form.set(CustomerField::Firstname, " Maria ");
    form.set(CustomerField::Lastname, "Papadopoulou");
    form.set(CustomerField::Tin, "123456789");
    let payload = form.insert_payload().expect("form is valid");

    let created = service.create_customer(&payload).await.unwrap();
    form.reset();
    assert_eq!(created.customer_id, 9);
    assert_eq!(form, CustomerForm::default());

    let req = backend.last_request().await;
    assert_eq!(req.path, "/api/customers");
    assert_eq!(
        req.json(),
        json!({
            "firstname": "Maria",
            "lastname": "Papadopoulou",
            "gender": "FEMALE",
            "phoneNumber": null,
            "address": null,
            "email": null,
            "tin": "123456789",
        })
    );
}

#[tokio::test]
async fn test_customer_backend_validation_lands_on_fields() {
    let backend = MockBackend::start().await;
    let (client, _) = client_for(&backend.base_url());
    let service = CustomerService::new(client);
    backend
        .enqueue_response(MockResponse::status(400, r#"{"email":"Email already registered"}"#))
        .await;

    let mut form = CustomerForm::new();
    form.set(CustomerField::Firstname, "Maria");
    form.set(CustomerField::Lastname, "Papadopoulou");
    form.set(CustomerField::Email, "maria@example.com");
    let payload = form.insert_payload().unwrap();

    let err = service.create_customer(&payload).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation { .. }));
    form.apply_service_error(&err);
    assert_eq!(form.error(CustomerField::Email), Some("Email already registered"));
}

#[tokio::test]
async fn test_customer_search_and_delete() {
    let backend = MockBackend::start().await;
    let (client, _) = client_for(&backend.base_url());
    let service = CustomerService::new(client);
    backend
        .enqueue_response(MockResponse::json(&page_json::<serde_json::Value>(&[], 0, 0, 0)))
        .await;
    backend.enqueue_response(MockResponse::status(404, "")).await;

    let filters = CustomerFilters {
        search_term: Some("papa".into()),
        page: Some(1),
        ..Default::default()
    };
    let listing = service.get_customers_filtered_paginated(&filters).await.unwrap();
    assert!(listing.is_empty());
    assert_eq!(backend.last_request().await.query.as_deref(), Some("page=1&searchTerm=papa"));

    let err = service.delete_customer(77).await.unwrap_err();
    assert_eq!(err.to_string(), "Customer not found");
}
