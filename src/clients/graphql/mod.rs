//! GraphQL request dispatch.
//!
//! - [`GraphqlClient`]: posts queries and mutations, returns the `data` member
//! - [`GraphqlError`]: everything that can go wrong on the way
//!
//! # Response Handling
//!
//! A response body with an `errors` member always fails the request, even
//! with HTTP 200, and the error displays as the comma-joined messages. Only
//! when no `errors` are present is the HTTP status consulted, and only a 2xx
//! response with a non-null `data` member succeeds.
//!
//! # Retry Behavior
//!
//! None. Each call issues exactly one request and waits for it however long
//! it takes.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
