//! HTTP transport for the action endpoint

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::sync::Once;
use tracing::trace;

use crate::config::ClientConfig;
use crate::error::Result;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

static CRYPTO_PROVIDER: Once = Once::new();

/// Install the ring rustls provider once per process
///
/// reqwest is built without a bundled provider, so one must be installed
/// before the first client is created. Installing is a no-op if the
/// application already chose a provider.
pub fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Raw HTTP exchange with the service
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// POSTs form bodies to one endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        ensure_crypto_provider();

        let client = ClientBuilder::new()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Create a transport with a custom reqwest client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one form-encoded POST and read the whole body
    pub async fn post_form(&self, body: String) -> Result<RawResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!("Response status: {}, {} bytes", status, body.len());

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_transport_rejects_invalid_endpoint() {
        let config = ClientConfig::default().with_endpoint("spinrewriter");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ApiError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    async fn test_post_form() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/action/api"))
            .and(header("content-type", FORM_CONTENT_TYPE))
            .and(body_string("action=api_quota"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config =
            ClientConfig::default().with_endpoint(format!("{}/action/api", mock_server.uri()));
        let transport = HttpTransport::new(&config).expect("Operation should succeed");
        let response = transport
            .post_form("action=api_quota".to_string())
            .await
            .expect("Operation should succeed");

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "{}");
    }

    #[tokio::test]
    async fn test_post_form_keeps_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&mock_server)
            .await;

        let config = ClientConfig::default().with_endpoint(mock_server.uri());
        let transport = HttpTransport::new(&config).expect("Operation should succeed");
        let response = transport
            .post_form(String::new())
            .await
            .expect("Operation should succeed");

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body, "down");
    }
}
