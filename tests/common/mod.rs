//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::sync::Arc;

use blue_margarita::api::{ApiClient, Paginated};
use blue_margarita::auth::{AuthProvider, TokenAuth};
use blue_margarita::config::{ApiConfig, SecureString};
use serde::Serialize;

pub const TEST_TOKEN: &str = "test-jwt";

/// Client pointed at `base_url`, authenticating with `TEST_TOKEN`.
pub fn client_for(base_url: &str) -> (ApiClient, Arc<TokenAuth>) {
    let auth = Arc::new(TokenAuth::new(Some(SecureString::new(TEST_TOKEN.to_string()))));
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    let provider: Arc<dyn AuthProvider> = auth.clone();
    let client = ApiClient::new(&config, provider).expect("client builds");
    (client, auth)
}

/// A backend-shaped page of `data`.
pub fn page_json<T: Serialize>(data: &[T], current_page: u32, total_pages: u32, total_elements: u64) -> String {
    serde_json::json!({
        "data": data,
        "currentPage": current_page,
        "totalPages": total_pages,
        "totalElements": total_elements,
        "pageSize": 20,
        "numberOfElements": data.len(),
    })
    .to_string()
}

/// Same shape, built locally.
pub fn page<T>(data: Vec<T>, current_page: u32, total_pages: u32, total_elements: u64) -> Paginated<T> {
    let number_of_elements = data.len() as u32;
    Paginated {
        data,
        current_page,
        total_pages,
        total_elements,
        page_size: Some(20),
        number_of_elements: Some(number_of_elements),
    }
}
