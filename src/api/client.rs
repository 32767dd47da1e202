use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{Operation, ServiceError};
use crate::api::query::QueryParams;
use crate::auth::AuthProvider;
use crate::config::ApiConfig;

/// HTTP client shared by every resource service.
///
/// Constructed once by the composition root and cloned into services;
/// clones share the connection pool and the auth provider.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Arc<dyn AuthProvider>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, auth: Arc<dyn AuthProvider>) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ServiceError::InvalidRequest(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Absolute URL for an API path with query parameters attached.
    pub fn endpoint(&self, path: &str, query: &QueryParams) -> Result<Url, ServiceError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ServiceError::InvalidRequest(format!("bad URL '{}': {}", raw, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
        op: &Operation,
    ) -> Result<T, ServiceError> {
        let url = self.endpoint(path, query)?;
        let body = self.execute::<()>(Method::GET, url.clone(), None, op).await?;
        decode(&url, &body)
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
        op: &Operation,
    ) -> Result<T, ServiceError> {
        let url = self.endpoint(path, &Vec::new())?;
        let body = self.execute(Method::POST, url.clone(), Some(payload), op).await?;
        decode(&url, &body)
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
        op: &Operation,
    ) -> Result<T, ServiceError> {
        let url = self.endpoint(path, &Vec::new())?;
        let body = self.execute(Method::PUT, url.clone(), Some(payload), op).await?;
        decode(&url, &body)
    }

    pub async fn delete(&self, path: &str, op: &Operation) -> Result<(), ServiceError> {
        let url = self.endpoint(path, &Vec::new())?;
        self.execute::<()>(Method::DELETE, url, None, op).await?;
        Ok(())
    }

    /// Send one request and return the body text of a 2xx response.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        payload: Option<&B>,
        op: &Operation,
    ) -> Result<String, ServiceError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(%request_id, "{} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .header("x-request-id", &request_id);

        for (name, value) in self.auth.auth_headers() {
            builder = builder.header(name, value);
        }

        if let Some(payload) = payload {
            builder = builder.header(CONTENT_TYPE, "application/json").json(payload);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(%request_id, "{} {} failed: {}", method, url, e);
            ServiceError::Transport {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ServiceError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        if status.is_success() {
            return Ok(body);
        }

        let err = ServiceError::from_status(status.as_u16(), op, &body);
        if err.is_auth_failure() {
            self.auth.on_unauthorized();
        }
        tracing::warn!(
            %request_id,
            status = status.as_u16(),
            kind = err.kind(),
            "{} error: {}",
            op.action,
            err
        );
        Err(err)
    }
}

fn decode<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Decode {
        url: url.to_string(),
        source: e,
    })
}
