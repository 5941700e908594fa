//! API clients for both service variants
//!
//! [`SpinRewriter`] and [`SpinWriter`] expose the same four operations over
//! one shared request path: encode the action, credentials and options as a
//! form body, POST it, decode the service's JSON envelope and turn a
//! non-`OK` status into [`ApiError::Api`].

mod rewriter;
mod writer;

pub use rewriter::SpinRewriter;
pub use writer::SpinWriter;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::{ClientConfig, Credentials};
use crate::error::{ApiError, Result};
use crate::options::{self, RequestOptions};
use crate::request::{Action, encode_form};
use crate::response::{Envelope, Status};
use crate::transport::HttpTransport;

/// Request path shared by both clients
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    transport: HttpTransport,
    credentials: Credentials,
}

impl ApiClient {
    pub(crate) fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            credentials,
        })
    }

    pub(crate) fn with_client(
        client: Client,
        credentials: Credentials,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            transport: HttpTransport::with_client(client, endpoint),
            credentials,
        }
    }

    pub(crate) fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Issue one action and return its envelope if the status is `OK`
    pub(crate) async fn call<E: Envelope>(
        &self,
        action: Action,
        options: &RequestOptions,
    ) -> Result<E> {
        let body = encode_form(&self.credentials, action, options);
        debug!(
            "{} request to {} with {} options",
            action,
            self.transport.endpoint(),
            options.len()
        );

        let response = self.transport.post_form(body).await?;

        let envelope: E = match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if !response.status.is_success() => {
                return Err(ApiError::HttpStatus(response.status));
            }
            Err(e) => return Err(ApiError::Decode(e)),
        };

        match envelope.status() {
            Status::Ok => Ok(envelope),
            status => {
                warn!("{} returned {:?}: {}", action, status, envelope.payload());
                Err(ApiError::api(envelope.into_payload()))
            }
        }
    }

    /// Issue an action carrying `text`, which overrides any `text` option
    pub(crate) async fn call_with_text<E: Envelope>(
        &self,
        action: Action,
        text: &str,
        mut request: RequestOptions,
    ) -> Result<E> {
        request.set(options::text(text));
        self.call(action, &request).await
    }
}
