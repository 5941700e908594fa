//! Error types for API operations

use reqwest::StatusCode;
use spinrewriter_spintax::SpintaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    // Transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status: {0}")]
    HttpStatus(StatusCode),

    // Response format errors
    #[error("Failed to decode response envelope: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Spintax error: {0}")]
    Spintax(#[from] SpintaxError),

    /// The service answered with an error status; `message` is its payload
    #[error("{message}")]
    Api { message: String },

    // Configuration errors
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// Create an application-level error from the service payload
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Server-supplied message for application-level errors
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }

    /// Check if the request never produced a usable HTTP exchange
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpStatus(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_payload_verbatim() {
        let err = ApiError::api("Authentication failed. Unique API key is not valid.");
        assert_eq!(
            err.to_string(),
            "Authentication failed. Unique API key is not valid."
        );
        assert_eq!(
            err.api_message(),
            Some("Authentication failed. Unique API key is not valid.")
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn test_status_error_is_transport() {
        let err = ApiError::HttpStatus(StatusCode::BAD_GATEWAY);
        assert!(err.is_transport());
        assert_eq!(err.api_message(), None);
    }

    #[test]
    fn test_spintax_error_conversion() {
        let err: ApiError = SpintaxError::Empty.into();
        assert!(matches!(err, ApiError::Spintax(SpintaxError::Empty)));
    }
}
