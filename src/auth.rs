//! Authentication collaborator consumed by the API client.
//!
//! The client never looks auth state up globally: an `AuthProvider`
//! is handed to `ApiClient` at construction and asked for headers on
//! every request. A 401 from the backend is reported back through
//! `on_unauthorized` so the host can force a new login.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{AuthConfig, CredentialStatus, SecureString};

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Capability object supplying per-request credentials.
pub trait AuthProvider: Send + Sync {
    /// Headers to attach to the next request. Empty when logged out.
    fn auth_headers(&self) -> Vec<AuthHeader>;

    /// Called when the backend rejected the credentials with 401.
    fn on_unauthorized(&self);
}

/// Bearer-token provider backed by a token from config or a login call.
///
/// Once the backend rejects the token the provider stops sending it and
/// reports `is_expired() == true` until a new token is installed.
#[derive(Debug)]
pub struct TokenAuth {
    token: parking_lot::RwLock<Option<SecureString>>,
    expired: AtomicBool,
}

impl TokenAuth {
    pub fn new(token: Option<SecureString>) -> Self {
        Self {
            token: parking_lot::RwLock::new(token),
            expired: AtomicBool::new(false),
        }
    }

    /// Build a provider from the `[auth]` config section.
    pub fn from_config(auth: &AuthConfig) -> Self {
        match auth.resolve_credential() {
            CredentialStatus::Configured(token) => Self::new(Some(token)),
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!("No API token configured: {}", reason);
                Self::new(None)
            }
            CredentialStatus::NoAuth => Self::new(None),
        }
    }

    /// Install a fresh token, clearing the expired flag.
    pub fn set_token(&self, token: SecureString) {
        *self.token.write() = Some(token);
        self.expired.store(false, Ordering::SeqCst);
    }

    /// Whether the backend has rejected the current token.
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }
}

impl AuthProvider for TokenAuth {
    fn auth_headers(&self) -> Vec<AuthHeader> {
        if self.is_expired() {
            return Vec::new();
        }
        match self.token.read().as_ref() {
            Some(token) => vec![(
                "Authorization".to_string(),
                format!("Bearer {}", token.expose()),
            )],
            None => Vec::new(),
        }
    }

    fn on_unauthorized(&self) {
        if !self.expired.swap(true, Ordering::SeqCst) {
            tracing::warn!("Authentication failed - token may be expired or invalid");
        }
    }
}
