//! Shared helpers for mock-server tests.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use serde_json::{Value, json};
use spinrewriter_api::{ClientConfig, Credentials, Service};
use std::collections::HashMap;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EMAIL: &str = "tester@example.com";
pub const API_KEY: &str = "0123456789abcdef";
pub const API_PATH: &str = "/action/api";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn credentials() -> Credentials {
    Credentials::new(EMAIL, API_KEY)
}

pub fn config(server: &MockServer, service: Service) -> ClientConfig {
    ClientConfig::for_service(service).with_endpoint(format!("{}{API_PATH}", server.uri()))
}

pub fn ok_envelope(made: u32, available: u32, response: &str) -> Value {
    json!({
        "status": "OK",
        "api_requests_made": made,
        "api_requests_available": available,
        "protected_terms": "",
        "confidence_level": "medium",
        "response": response,
    })
}

pub fn error_envelope(message: &str) -> Value {
    json!({
        "status": "ERROR",
        "api_requests_made": 0,
        "api_requests_available": 0,
        "response": message,
    })
}

/// Respond to every POST on the API path with `body`
pub async fn mount_json(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Decoded form fields of every request the server received
pub async fn received_forms(server: &MockServer) -> Vec<HashMap<String, String>> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .iter()
        .map(|request| {
            url::form_urlencoded::parse(&request.body)
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .collect()
}

/// Raw `key=value` pairs of the only received request, duplicates included
pub async fn received_pairs(server: &MockServer) -> Vec<(String, String)> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");

    url::form_urlencoded::parse(&requests[0].body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
