//! HTTP and GraphQL client types.
//!
//! # Overview
//!
//! - [`HttpClient`]: posts JSON bodies to the configured endpoint
//! - [`HttpResponse`]: status, headers and parsed body of a response
//! - [`HttpError`]: transport and non-2xx failures
//! - [`graphql::GraphqlClient`]: the request dispatcher built on [`HttpClient`]
//! - [`graphql::GraphqlError`]: GraphQL-level error type
//!
//! # Example
//!
//! ```rust,ignore
//! use flight_board::clients::HttpClient;
//! use flight_board::ClientConfig;
//! use serde_json::json;
//!
//! let client = HttpClient::new(&ClientConfig::default());
//! let response = client.post_json(&json!({"query": "{ airlines { id } }"})).await?;
//! println!("{} {}", response.code, response.body);
//! ```

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
