//! Response wrapper and request error type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP error: status {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid JSON response: {0}")]
    Decode(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("requests are only available in the browser")]
    Unavailable,
    #[error("success callback failed: {0}")]
    Callback(String),
}

/// Parsed JSON body of a successful (2xx) response.
///
/// Endpoints conventionally answer `{"success": bool, "message"?: string}`
/// alongside any payload fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] when `raw` is not valid JSON.
    pub fn from_text(status: u16, raw: &str) -> Result<Self, RequestError> {
        let body = serde_json::from_str(raw).map_err(|e| RequestError::Decode(e.to_string()))?;
        Ok(Self::new(status, body))
    }

    /// The body's `success` flag; absent or non-boolean counts as `false`.
    pub fn success(&self) -> bool {
        self.body.get("success").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Deserialize the body into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] when the body does not match `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
        T::deserialize(&self.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}
