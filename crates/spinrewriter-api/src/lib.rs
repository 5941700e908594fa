//! # spinrewriter-api
//!
//! Async client for the Spin Rewriter and Spin Writer text spinning APIs.
//!
//! Both services expose one form-encoded `POST` endpoint that takes an
//! `action`, the account email and API key, and a set of optional
//! parameters, and answers with a JSON envelope:
//!
//! | Operation | Action | Result |
//! |---|---|---|
//! | `quota` | `api_quota` | [`Quota`] |
//! | `spintax` | `text_with_spintax` | [`SpunText`] / [`Spintax`] |
//! | `unique_variation` | `unique_variation` | `String` |
//! | `unique_spintax_variation` | `unique_variation_from_spintax` | `String` |
//!
//! Every call is a single request/response exchange. There is no retry or
//! caching; errors are returned to the caller as [`ApiError`]:
//!
//! - transport failures: [`ApiError::Http`], [`ApiError::HttpStatus`]
//! - envelopes that do not decode: [`ApiError::Decode`]
//! - envelopes with a non-`OK` status: [`ApiError::Api`], whose message is the
//!   service's `response` text
//!
//! ## Example
//!
//! ```rust,no_run
//! use spinrewriter_api::{Credentials, SpinRewriter, SpintaxFormat, options};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpinRewriter::with_config(
//!         Credentials::from_env()?,
//!         &spinrewriter_api::ClientConfig::default(),
//!     )?;
//!
//!     let quota = client.quota().await?;
//!     println!("{} of {} calls used", quota.requests_made,
//!         quota.requests_made + quota.requests_available);
//!
//!     let spun = client
//!         .spintax(
//!             "{first option|second option}",
//!             [
//!                 options::nested_spintax(),
//!                 options::spintax_format(SpintaxFormat::SpinBrackets),
//!             ],
//!         )
//!         .await?;
//!     println!("{}", spun.spintax);
//!     for option in spun.spintax.options() {
//!         println!("  {option}");
//!     }
//!
//!     let unique = client
//!         .unique_variation("The quick brown fox.", [options::humanize_typos()])
//!         .await?;
//!     println!("{unique}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{SpinRewriter, SpinWriter};
pub use config::{ClientConfig, Credentials, SPINREWRITER_ENDPOINT, SPINWRITER_ENDPOINT, Service};
pub use error::{ApiError, Result};
pub use options::{Confidence, Param, RequestOptions};
pub use request::Action;
pub use response::{Envelope, Quota, RewriterResponse, SpunText, Status, WriterResponse};
pub use spinrewriter_spintax::{Spintax, SpintaxError, SpintaxFormat};
