//! Configuration structures for API clients

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::{ApiError, Result};

/// Spin Rewriter API endpoint
pub const SPINREWRITER_ENDPOINT: &str = "https://www.spinrewriter.com/action/api";

/// Spin Writer API endpoint
pub const SPINWRITER_ENDPOINT: &str = "https://www.spinwriter.com/action/api";

/// Remote service variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    #[default]
    SpinRewriter,
    SpinWriter,
}

impl Service {
    /// Default endpoint for this service
    pub fn endpoint(&self) -> &'static str {
        match self {
            Service::SpinRewriter => SPINREWRITER_ENDPOINT,
            Service::SpinWriter => SPINWRITER_ENDPOINT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::SpinRewriter => "spinrewriter",
            Service::SpinWriter => "spinwriter",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API endpoint URL
    pub endpoint: String,

    /// Request timeout
    pub request_timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// User agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_service(Service::default())
    }
}

impl ClientConfig {
    /// Default configuration targeting the given service
    pub fn for_service(service: Service) -> Self {
        Self {
            endpoint: service.endpoint().to_string(),
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("spinrewriter-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Create configuration from environment variables
    pub fn from_env(service: Service) -> Self {
        let defaults = Self::for_service(service);
        Self {
            endpoint: std::env::var("SPINREWRITER_ENDPOINT").unwrap_or(defaults.endpoint),
            request_timeout: std::env::var("SPINREWRITER_REQUEST_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.request_timeout, Duration::from_secs),
            connect_timeout: std::env::var("SPINREWRITER_CONNECT_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.connect_timeout, Duration::from_secs),
            user_agent: defaults.user_agent,
        }
    }

    /// Set the endpoint URL
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check that the endpoint is an absolute HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {e}", self.endpoint)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ApiError::InvalidEndpoint(format!(
                "{}: unsupported scheme {scheme}",
                self.endpoint
            ))),
        }
    }
}

/// Account email and API key sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    api_key: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
        }
    }

    /// Load credentials from `SPINREWRITER_EMAIL` and `SPINREWRITER_API_KEY`
    pub fn from_env() -> Result<Self> {
        let email = std::env::var("SPINREWRITER_EMAIL")
            .map_err(|_| ApiError::MissingCredential("SPINREWRITER_EMAIL"))?;
        let api_key = std::env::var("SPINREWRITER_API_KEY")
            .map_err(|_| ApiError::MissingCredential("SPINREWRITER_API_KEY"))?;
        Ok(Self::new(email, api_key))
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_spinrewriter() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, SPINREWRITER_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_service() {
        let config = ClientConfig::for_service(Service::SpinWriter);
        assert_eq!(config.endpoint, SPINWRITER_ENDPOINT);
        assert!(config.user_agent.starts_with("spinrewriter-api/"));
    }

    #[test]
    fn test_validate_rejects_bad_endpoints() {
        let config = ClientConfig::default().with_endpoint("not a url");
        assert!(matches!(
            config.validate(),
            Err(ApiError::InvalidEndpoint(_))
        ));

        let config = ClientConfig::default().with_endpoint("ftp://example.com/api");
        assert!(matches!(
            config.validate(),
            Err(ApiError::InvalidEndpoint(msg)) if msg.contains("ftp")
        ));

        let config = ClientConfig::default().with_endpoint("http://127.0.0.1:8080/action/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let credentials = Credentials::new("user@example.com", "secret-key");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("secret-key"));
        assert_eq!(credentials.api_key(), "secret-key");
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ClientConfig::for_service(Service::SpinWriter)
            .with_request_timeout(Duration::from_secs(5));
        let json = serde_json::to_string(&config).expect("config should serialize");
        let back: ClientConfig = serde_json::from_str(&json).expect("config should deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn test_service_display() {
        assert_eq!(Service::SpinRewriter.to_string(), "spinrewriter");
        assert_eq!(Service::SpinWriter.to_string(), "spinwriter");
    }
}
