use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub lists: ListConfig,
}

/// Connection settings for the back-office REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (scheme + host + port), without `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Credentials used by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication type: "bearer" or "none".
    #[serde(rename = "auth_type", default = "default_auth_type")]
    pub auth_type_str: String,
    /// JWT issued by the backend login endpoint.
    #[serde(default)]
    pub token: Option<String>,
}

/// Settings shared by every paginated list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Quiet period for text filters, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_auth_type() -> String {
    "bearer".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_type_str: default_auth_type(),
            token: None,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
        }
    }
}
