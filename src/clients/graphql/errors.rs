//! GraphQL-specific error types.
//!
//! - [`GraphqlError::Http`]: transport failures and non-2xx responses
//! - [`GraphqlError::Response`]: the server answered with an `errors` array
//! - [`GraphqlError::MissingData`]: no `errors`, but no `data` either
//! - [`GraphqlError::Decode`]: `data` did not have the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use flight_board::clients::graphql::GraphqlError;
//!
//! match client.send_request("query { airlines { id name } }", None).await {
//!     Ok(data) => println!("{}", data["airlines"]),
//!     Err(GraphqlError::Response { messages }) => println!("rejected: {}", messages.join(", ")),
//!     Err(other) => println!("failed: {other}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response carried an `errors` array.
    ///
    /// Displays as the individual messages joined with `", "`.
    #[error("{}", .messages.join(", "))]
    Response {
        /// One entry per error object, in response order.
        messages: Vec<String>,
    },

    /// The response had neither `errors` nor a non-null `data` member.
    #[error("GraphQL response contained no data")]
    MissingData,

    /// The `data` member could not be decoded into the requested type.
    #[error("Failed to decode GraphQL data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GraphqlError {
    /// Collects the messages of a GraphQL `errors` value.
    ///
    /// Error objects without a string `message` contribute an empty string;
    /// a non-array value is treated as a single such object.
    #[must_use]
    pub fn from_errors_value(errors: &serde_json::Value) -> Self {
        let message_of = |error: &serde_json::Value| {
            error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let messages = errors.as_array().map_or_else(
            || vec![message_of(errors)],
            |list| list.iter().map(message_of).collect(),
        );

        Self::Response { messages }
    }
}
