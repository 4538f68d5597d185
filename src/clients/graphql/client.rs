//! GraphQL client implementation.
//!
//! This module provides the [`GraphqlClient`] type, the request dispatcher
//! every board handler goes through.

use serde::de::DeserializeOwned;

use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpResponse};
use crate::config::{ClientConfig, Endpoint};

/// GraphQL client for the flight-data API.
///
/// Sends `{"query", "variables"}` documents as JSON POSTs and turns the
/// response into either the `data` member or a [`GraphqlError`].
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`. Concurrent calls are independent; there
/// is no ordering between their responses.
///
/// # Example
///
/// ```rust,ignore
/// use flight_board::{ClientConfig, GraphqlClient};
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&ClientConfig::default());
///
/// let data = client.send_request("query { airlines { id name } }", None).await?;
/// println!("{}", data["airlines"]);
///
/// let data = client.send_request(
///     "query($code: String!) { findAirportByCode(code: $code) { name } }",
///     Some(json!({ "code": "JFK" })),
/// ).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        self.http_client.endpoint()
    }

    /// Sends a query or mutation and returns the `data` member.
    ///
    /// `variables` defaults to an empty object.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Response`] if the body carries an `errors` member,
    ///   whatever the HTTP status
    /// - [`GraphqlError::Http`] for transport failures and other non-2xx
    ///   responses
    /// - [`GraphqlError::MissingData`] if `data` is absent or null
    pub async fn send_request(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables.unwrap_or_else(|| serde_json::json!({})),
        });

        tracing::debug!("Sending GraphQL request to {}", self.endpoint());

        let response = self.http_client.post_json(&body).await?;
        Self::extract_data(response)
    }

    /// Sends a query or mutation and decodes the `data` member into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`send_request`](Self::send_request) returns, plus
    /// [`GraphqlError::Decode`] if `data` does not match `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, GraphqlError> {
        let data = self.send_request(query, variables).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Splits a response into `data` or the matching error.
    fn extract_data(response: HttpResponse) -> Result<serde_json::Value, GraphqlError> {
        if let Some(errors) = response.body.get("errors").filter(|e| !e.is_null()) {
            let error = GraphqlError::from_errors_value(errors);
            tracing::warn!("GraphQL request returned errors: {}", error);
            return Err(error);
        }

        if !response.is_ok() {
            return Err(GraphqlError::Http(
                HttpClient::response_error(&response).into(),
            ));
        }

        let HttpResponse { mut body, .. } = response;
        match body.get_mut("data").map(serde_json::Value::take) {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(GraphqlError::MissingData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(code: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_extract_data_returns_data_member() {
        let data = GraphqlClient::extract_data(response(
            200,
            json!({"data": {"airlines": [{"id": "1", "name": "Delta"}]}}),
        ))
        .unwrap();

        assert_eq!(data["airlines"][0]["name"], "Delta");
    }

    #[test]
    fn test_extract_data_prefers_errors_over_status() {
        let result = GraphqlClient::extract_data(response(
            400,
            json!({"errors": [{"message": "Syntax Error"}]}),
        ));

        assert!(matches!(result, Err(GraphqlError::Response { .. })));
        assert_eq!(result.unwrap_err().to_string(), "Syntax Error");
    }

    #[test]
    fn test_extract_data_ignores_null_errors() {
        let data =
            GraphqlClient::extract_data(response(200, json!({"data": {"flights": []}, "errors": null})))
                .unwrap();
        assert_eq!(data, json!({"flights": []}));
    }

    #[test]
    fn test_extract_data_reports_http_error_without_graphql_errors() {
        let result = GraphqlClient::extract_data(response(503, json!({"raw_body": "down"})));

        match result {
            Err(GraphqlError::Http(crate::clients::HttpError::Response(e))) => {
                assert_eq!(e.code, 503);
                assert!(e.message.contains("down"));
            }
            other => panic!("expected HTTP response error, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_data_requires_data() {
        assert!(matches!(
            GraphqlClient::extract_data(response(200, json!({}))),
            Err(GraphqlError::MissingData)
        ));
        assert!(matches!(
            GraphqlClient::extract_data(response(200, json!({"data": null}))),
            Err(GraphqlError::MissingData)
        ));
    }

    #[test]
    fn test_graphql_client_uses_config_endpoint() {
        let client = GraphqlClient::new(&ClientConfig::default());
        assert_eq!(client.endpoint().as_ref(), crate::config::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }
}
