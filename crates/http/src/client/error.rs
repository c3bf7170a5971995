//! Client error types

use listkeeper_core::CoreError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend rejected the bearer token
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Backend returned any other non-success status
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Durable token storage failed
    #[error("Token storage failed: {0}")]
    Storage(String),
}

impl ClientError {
    /// Create error from HTTP status code and response body.
    ///
    /// Backends that answer with `{"detail": "..."}` get the detail as the
    /// message; anything else keeps the raw body.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let message = extract_detail(&body).unwrap_or(body);
        match status.as_u16() {
            401 => Self::Unauthorized(message),
            code => Self::Status {
                status: code,
                message,
            },
        }
    }

    /// Whether the backend considers the session expired
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// HTTP status carried by this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidConfig { message } => Self::Configuration(message),
            other => Self::Storage(other.to_string()),
        }
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}
