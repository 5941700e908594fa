//! Spin Writer client

use reqwest::Client;
use spinrewriter_spintax::Spintax;

use super::ApiClient;
use crate::config::{ClientConfig, Credentials, Service};
use crate::error::Result;
use crate::options::{Param, RequestOptions};
use crate::request::Action;
use crate::response::{Envelope, Quota, WriterResponse};

/// Client for the Spin Writer API
///
/// Same operations as [`SpinRewriter`](crate::SpinRewriter) with plainer
/// results: spintax comes back without quota and spintax input is a string.
#[derive(Debug, Clone)]
pub struct SpinWriter {
    api: ApiClient,
}

impl SpinWriter {
    /// Create a client with the default Spin Writer configuration
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(
            Credentials::new(email, api_key),
            &ClientConfig::for_service(Service::SpinWriter),
        )
    }

    pub fn with_config(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(credentials, config)?,
        })
    }

    pub fn with_client(
        client: Client,
        credentials: Credentials,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            api: ApiClient::with_client(client, credentials, endpoint),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.api.endpoint()
    }

    pub fn credentials(&self) -> &Credentials {
        self.api.credentials()
    }

    /// Number of made and remaining API calls for the 24-hour period
    pub async fn quota(&self) -> Result<Quota> {
        let envelope: WriterResponse =
            self.api.call(Action::ApiQuota, &RequestOptions::new()).await?;
        Ok(envelope.quota())
    }

    /// Spin `text` and return it with spintax in the requested format
    pub async fn spintax(
        &self,
        text: &str,
        options: impl IntoIterator<Item = Param>,
    ) -> Result<Spintax> {
        let request: RequestOptions = options.into_iter().collect();
        let format = request.spintax_format()?;

        let envelope: WriterResponse = self
            .api
            .call_with_text(Action::TextWithSpintax, text, request)
            .await?;
        Ok(Spintax::new(envelope.into_payload(), format))
    }

    pub async fn unique_variation(
        &self,
        text: &str,
        options: impl IntoIterator<Item = Param>,
    ) -> Result<String> {
        let envelope: WriterResponse = self
            .api
            .call_with_text(Action::UniqueVariation, text, options.into_iter().collect())
            .await?;
        Ok(envelope.into_payload())
    }

    /// One unique variation of a spintax-marked string
    pub async fn unique_spintax_variation(
        &self,
        spintax: &str,
        options: impl IntoIterator<Item = Param>,
    ) -> Result<String> {
        let envelope: WriterResponse = self
            .api
            .call_with_text(
                Action::UniqueVariationFromSpintax,
                spintax,
                options.into_iter().collect(),
            )
            .await?;
        Ok(envelope.into_payload())
    }
}
