//! Credential resolution from configuration.
//!
//! This module provides secure handling of the session token
//! resolved from the config at runtime.

use super::types::AuthConfig;

/// Authentication type for API requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// Standard `Authorization: Bearer` header.
    Bearer,
    /// No authentication required.
    None,
}

impl AuthType {
    /// Parse auth type from string.
    /// Defaults to `Bearer` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "none" => AuthType::None,
            _ => AuthType::Bearer,
        }
    }
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building headers.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Token resolved successfully.
    Configured(SecureString),
    /// Token is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
    /// No authentication required.
    NoAuth,
}

impl AuthConfig {
    /// Parse the auth_type field to AuthType enum.
    pub fn auth_type(&self) -> AuthType {
        AuthType::from_str(&self.auth_type_str)
    }

    /// Resolve the token from configuration.
    pub fn resolve_credential(&self) -> CredentialStatus {
        match self.auth_type() {
            AuthType::None => CredentialStatus::NoAuth,
            AuthType::Bearer => match self.token.as_deref().map(str::trim) {
                Some(token) if !token.is_empty() => {
                    CredentialStatus::Configured(SecureString::new(token.to_string()))
                }
                _ => CredentialStatus::Unconfigured {
                    reason: "auth.token is not set".to_string(),
                },
            },
        }
    }
}
