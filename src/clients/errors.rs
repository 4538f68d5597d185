//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response that carried no GraphQL errors
//! - [`HttpError`]: unified error covering response and transport failures
//!
//! GraphQL-level errors (HTTP 200 with an `errors` array) are reported by
//! [`GraphqlError`](crate::clients::graphql::GraphqlError) instead.

use thiserror::Error;

/// Error returned when the endpoint answers with a non-successful status.
///
/// The message is a compact JSON document holding whatever `error`/`message`
/// fields the body had, plus an `error_reference` when the server sent an
/// `X-Request-Id` header.
///
/// # Example
///
/// ```rust
/// use flight_board::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: r#"{"error":"Bad Gateway"}"#.to_string(),
///     error_reference: None,
/// };
/// assert_eq!(error.to_string(), r#"{"error":"Bad Gateway"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for HTTP failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without GraphQL errors.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
