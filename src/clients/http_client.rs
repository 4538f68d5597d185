//! HTTP transport for the GraphQL endpoint.
//!
//! This module provides the [`HttpClient`] type, which POSTs JSON documents to
//! the configured endpoint and parses whatever comes back.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::{ClientConfig, Endpoint};

/// Crate version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the flight-data endpoint.
///
/// The client handles:
/// - Default headers including User-Agent, Accept and Content-Type
/// - JSON body serialization
/// - Lenient response parsing (non-JSON bodies never fail the transport)
///
/// There is no retry loop and no timeout: a request that never completes
/// keeps its caller waiting.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Where every request is posted.
    endpoint: Endpoint,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Flight Board Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().clone(),
            default_headers,
        }
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs a JSON body to the endpoint and returns the parsed response.
    ///
    /// Any status code is returned as a response; deciding what a non-2xx
    /// status means is left to the caller. Bodies that are not JSON become
    /// `{"raw_body": "..."}` for 5xx statuses and `{}` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be sent or
    /// the response could not be read.
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(self.endpoint.as_ref());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        tracing::debug!("POST {} answered with status {}", self.endpoint, code);

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Builds the error for a non-2xx response that carried no GraphQL errors.
    pub(crate) fn response_error(response: &HttpResponse) -> HttpResponseError {
        let mut error_body = serde_json::Map::new();

        for field in ["error", "message", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        if error_body.is_empty() {
            error_body.insert(
                "error".to_string(),
                serde_json::json!(format!("HTTP status {}", response.code)),
            );
        }

        HttpResponseError {
            code: response.code,
            message: serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string()),
            error_reference: response.request_id().map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;
    use serde_json::json;

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = ClientConfig::builder()
            .endpoint(Endpoint::new("http://flights.test:8080/graphql").unwrap())
            .build();
        let client = HttpClient::new(&config);

        assert_eq!(client.endpoint().as_ref(), "http://flights.test:8080/graphql");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&ClientConfig::default());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Flight Board Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ClientConfig::builder().user_agent_prefix("Kiosk/1.0").build();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Kiosk/1.0 | "));
        assert!(user_agent.contains("Flight Board Client"));
    }

    #[test]
    fn test_json_headers_are_set() {
        let client = HttpClient::new(&ClientConfig::default());

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_response_error_keeps_known_fields() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let response = HttpResponse::new(502, headers, json!({"error": "Bad Gateway"}));

        let error = HttpClient::response_error(&response);

        assert_eq!(error.code, 502);
        assert!(error.message.contains("Bad Gateway"));
        assert!(error.message.contains("req-9"));
        assert_eq!(error.error_reference.as_deref(), Some("req-9"));
    }

    #[test]
    fn test_response_error_falls_back_to_status() {
        let response = HttpResponse::new(404, HashMap::new(), json!({}));

        let error = HttpClient::response_error(&response);

        assert_eq!(error.message, r#"{"error":"HTTP status 404"}"#);
        assert!(error.error_reference.is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
