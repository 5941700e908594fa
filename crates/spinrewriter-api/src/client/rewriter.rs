//! Spin Rewriter client

use reqwest::Client;
use spinrewriter_spintax::Spintax;

use super::ApiClient;
use crate::config::{ClientConfig, Credentials, Service};
use crate::error::Result;
use crate::options::{Param, RequestOptions};
use crate::request::Action;
use crate::response::{Envelope, Quota, RewriterResponse, SpunText};

/// Client for the Spin Rewriter API
///
/// Spintax results carry the quota reported on the same response.
///
/// ```rust,no_run
/// use spinrewriter_api::{SpinRewriter, options};
///
/// #[tokio::main]
/// async fn main() -> Result<(), spinrewriter_api::ApiError> {
///     let client = SpinRewriter::new("me@example.com", "api-key")?;
///
///     let spun = client
///         .spintax(
///             "This is a seo sentence. Keep this tag.",
///             [options::protected_terms(["seo", "this"])],
///         )
///         .await?;
///     println!("{} options", spun.spintax.num_options());
///     println!("{} calls left today", spun.quota.requests_available);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpinRewriter {
    api: ApiClient,
}

impl SpinRewriter {
    /// Create a client with the default Spin Rewriter configuration
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(
            Credentials::new(email, api_key),
            &ClientConfig::for_service(Service::SpinRewriter),
        )
    }

    pub fn with_config(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(credentials, config)?,
        })
    }

    /// Create a client with a custom reqwest client and endpoint
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
        let envelope: RewriterResponse =
            self.api.call(Action::ApiQuota, &RequestOptions::new()).await?;
        Ok(envelope.quota())
    }

    /// Spin `text` and return it with spintax
    ///
    /// The returned text is tagged with the format requested through
    /// [`options::spintax_format`](crate::options::spintax_format), `{|}` by
    /// default. Its options are split out when the whole payload is one
    /// block; an article with several blocks is returned as is.
    pub async fn spintax(
        &self,
        text: &str,
        options: impl IntoIterator<Item = Param>,
    ) -> Result<SpunText> {
        let request: RequestOptions = options.into_iter().collect();
        let format = request.spintax_format()?;

        let envelope: RewriterResponse = self
            .api
            .call_with_text(Action::TextWithSpintax, text, request)
            .await?;
        let quota = envelope.quota();
        let spintax = Spintax::new(envelope.into_payload(), format);

        Ok(SpunText { spintax, quota })
    }

    /// One unique variation of `text`
    pub async fn unique_variation(
        &self,
        text: &str,
        options: impl IntoIterator<Item = Param>,
    ) -> Result<String> {
        let envelope: RewriterResponse = self
            .api
            .call_with_text(Action::UniqueVariation, text, options.into_iter().collect())
            .await?;
        Ok(envelope.into_payload())
    }

    /// One unique variation of already spun text
    pub async fn unique_spintax_variation(
        &self,
        spintax: &Spintax,
        options: impl IntoIterator<Item = Param>,
    ) -> Result<String> {
        let envelope: RewriterResponse = self
            .api
            .call_with_text(
                Action::UniqueVariationFromSpintax,
                spintax.as_str(),
                options.into_iter().collect(),
            )
            .await?;
        Ok(envelope.into_payload())
    }
}
