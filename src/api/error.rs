//! Error taxonomy for resource services.
//!
//! Every failed call is classified by HTTP status code into a typed
//! variant carrying the user-facing message for that operation.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised by resource service calls.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 400: the backend rejected the payload.
    #[error("{message}")]
    Validation {
        message: String,
        /// Field name to message, when the backend reported them.
        field_errors: BTreeMap<String, String>,
    },

    /// 401: missing, expired or invalid credentials.
    #[error("{message}")]
    Authentication { message: String },

    /// 403: authenticated but not allowed.
    #[error("{message}")]
    AccessDenied { message: String },

    /// 404
    #[error("{message}")]
    NotFound { message: String },

    /// 409: uniqueness conflict.
    #[error("{message}")]
    Conflict { message: String },

    /// Any other non-success status.
    #[error("{message}")]
    Generic { status: u16, message: String },

    /// The request never produced a response.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the declared type.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be built (bad URL or filter object).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Messages for one service operation, used when mapping a failed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Verb phrase for the generic message, e.g. "create category".
    pub action: &'static str,
    /// Resource name for not-found messages, e.g. "Category".
    pub resource: &'static str,
    /// Message reported on 409.
    pub conflict: &'static str,
}

pub const AUTHENTICATION_FAILED: &str = "Authentication failed - please log in again";
pub const ACCESS_DENIED: &str = "Access denied - requires ADMIN role";
pub const VALIDATION_FAILED: &str = "Validation errors";

impl ServiceError {
    /// Classify a non-success response.
    ///
    /// `body` is the raw response text; a 400 body shaped as a JSON
    /// object of strings is kept as per-field messages.
    pub fn from_status(status: u16, op: &Operation, body: &str) -> Self {
        match status {
            400 => ServiceError::Validation {
                message: VALIDATION_FAILED.to_string(),
                field_errors: serde_json::from_str(body).unwrap_or_default(),
            },
            401 => ServiceError::Authentication {
                message: AUTHENTICATION_FAILED.to_string(),
            },
            403 => ServiceError::AccessDenied {
                message: ACCESS_DENIED.to_string(),
            },
            404 => ServiceError::NotFound {
                message: format!("{} not found", op.resource),
            },
            409 => ServiceError::Conflict {
                message: op.conflict.to_string(),
            },
            _ => ServiceError::Generic {
                status,
                message: format!("Failed to {}: {}", op.action, status),
            },
        }
    }

    /// HTTP status behind this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Validation { .. } => Some(400),
            ServiceError::Authentication { .. } => Some(401),
            ServiceError::AccessDenied { .. } => Some(403),
            ServiceError::NotFound { .. } => Some(404),
            ServiceError::Conflict { .. } => Some(409),
            ServiceError::Generic { status, .. } => Some(*status),
            ServiceError::Transport { .. }
            | ServiceError::Decode { .. }
            | ServiceError::InvalidRequest(_) => None,
        }
    }

    /// Stable tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation { .. } => "validation",
            ServiceError::Authentication { .. } => "authentication",
            ServiceError::AccessDenied { .. } => "access_denied",
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::Conflict { .. } => "conflict",
            ServiceError::Generic { .. } => "service_error",
            ServiceError::Transport { .. } => "transport",
            ServiceError::Decode { .. } => "decode",
            ServiceError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// Whether the caller should force a new login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ServiceError::Authentication { .. })
    }
}
