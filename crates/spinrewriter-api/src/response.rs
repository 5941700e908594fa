//! Response envelopes returned by the services

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use spinrewriter_spintax::Spintax;

use crate::options::Confidence;

/// Envelope status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
    /// Any status string this client does not know
    #[serde(other)]
    Unknown,
}

/// API calls made and remaining in the current 24-hour window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quota {
    pub requests_made: u32,
    pub requests_available: u32,
}

/// Common view over the service-specific envelopes
pub trait Envelope: DeserializeOwned {
    fn status(&self) -> Status;

    /// The `response` field: result text on success, error message otherwise
    fn payload(&self) -> &str;

    fn into_payload(self) -> String;

    fn quota(&self) -> Quota;
}

/// Spin Rewriter envelope; protected terms are echoed as one string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriterResponse {
    pub status: Status,
    #[serde(rename = "api_requests_made", default)]
    pub requests_made: u32,
    #[serde(rename = "api_requests_available", default)]
    pub requests_available: u32,
    #[serde(default)]
    pub protected_terms: Option<String>,
    #[serde(default)]
    pub confidence_level: Option<Confidence>,
    #[serde(rename = "response", default)]
    pub payload: String,
}

/// Spin Writer envelope; protected terms are echoed as a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterResponse {
    pub status: Status,
    #[serde(rename = "api_requests_made", default)]
    pub requests_made: u32,
    #[serde(rename = "api_requests_available", default)]
    pub requests_available: u32,
    #[serde(default)]
    pub protected_terms: Option<Vec<String>>,
    #[serde(default)]
    pub confidence_level: Option<Confidence>,
    #[serde(rename = "response", default)]
    pub payload: String,
}

macro_rules! impl_envelope {
    ($ty:ty) => {
        impl Envelope for $ty {
            fn status(&self) -> Status {
                self.status
            }

            fn payload(&self) -> &str {
                &self.payload
            }

            fn into_payload(self) -> String {
                self.payload
            }

            fn quota(&self) -> Quota {
                Quota {
                    requests_made: self.requests_made,
                    requests_available: self.requests_available,
                }
            }
        }
    };
}

impl_envelope!(RewriterResponse);
impl_envelope!(WriterResponse);

/// Spun text together with the quota reported on the same response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpunText {
    pub spintax: Spintax,
    pub quota: Quota,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_rewriter_success() {
        let json = r#"{
            "status": "OK",
            "api_requests_made": 12,
            "api_requests_available": 488,
            "protected_terms": "seo\nthis",
            "confidence_level": "medium",
            "response": "{Hello|Hi} world"
        }"#;
        let envelope: RewriterResponse = serde_json::from_str(json).expect("valid envelope");

        assert_eq!(envelope.status(), Status::Ok);
        assert_eq!(
            envelope.quota(),
            Quota {
                requests_made: 12,
                requests_available: 488
            }
        );
        assert_eq!(envelope.protected_terms.as_deref(), Some("seo\nthis"));
        assert_eq!(envelope.confidence_level, Some(Confidence::Medium));
        assert_eq!(envelope.payload(), "{Hello|Hi} world");
    }

    #[test]
    fn test_decode_writer_protected_terms_list() {
        let json = r#"{
            "status": "OK",
            "api_requests_made": 1,
            "api_requests_available": 99,
            "protected_terms": ["seo", "this"],
            "confidence_level": "high",
            "response": "text"
        }"#;
        let envelope: WriterResponse = serde_json::from_str(json).expect("valid envelope");

        assert_eq!(
            envelope.protected_terms,
            Some(vec!["seo".to_string(), "this".to_string()])
        );
        assert_eq!(envelope.confidence_level, Some(Confidence::High));
        assert_eq!(envelope.into_payload(), "text");
    }

    #[test]
    fn test_decode_error_envelope_without_counters() {
        let json = r#"{"status":"ERROR","response":"Authentication with Spin Rewriter API failed."}"#;
        let envelope: RewriterResponse = serde_json::from_str(json).expect("valid envelope");

        assert_eq!(envelope.status(), Status::Error);
        assert_eq!(envelope.quota(), Quota::default());
        assert_eq!(envelope.protected_terms, None);
        assert_eq!(
            envelope.payload(),
            "Authentication with Spin Rewriter API failed."
        );
    }

    #[test]
    fn test_unknown_status() {
        let json = r#"{"status":"PENDING","response":""}"#;
        let envelope: WriterResponse = serde_json::from_str(json).expect("valid envelope");
        assert_eq!(envelope.status(), Status::Unknown);
    }

    #[test]
    fn test_missing_status_is_decode_error() {
        let result = serde_json::from_str::<RewriterResponse>(r#"{"response":"x"}"#);
        assert!(result.is_err());
    }
}
