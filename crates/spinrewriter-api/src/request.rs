//! Request actions and form body encoding

use std::fmt;
use url::form_urlencoded;

use crate::config::Credentials;
use crate::options::{Param, RequestOptions};

/// API action names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Used and remaining calls in the current 24-hour window
    ApiQuota,
    /// Spin text and return it with spintax
    TextWithSpintax,
    /// Generate one unique variation of plain text
    UniqueVariation,
    /// Generate one unique variation of spintax input
    UniqueVariationFromSpintax,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ApiQuota => "api_quota",
            Action::TextWithSpintax => "text_with_spintax",
            Action::UniqueVariation => "unique_variation",
            Action::UniqueVariationFromSpintax => "unique_variation_from_spintax",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Encode a request as an `application/x-www-form-urlencoded` body
///
/// Options go in first; credentials and action are written last so a stray
/// option can never replace them. Keys are emitted in sorted order.
pub fn encode_form(credentials: &Credentials, action: Action, options: &RequestOptions) -> String {
    let mut fields = options.clone();
    fields.extend([
        Param::custom("email_address", credentials.email()),
        Param::custom("api_key", credentials.api_key()),
        Param::custom("action", action.as_str()),
    ]);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(fields.iter());
    serializer.finish()
}
