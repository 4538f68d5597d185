//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use flight_board::{ConfigError, Endpoint};
//!
//! let result = Endpoint::new("localhost:4000/graphql");
//! assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The GraphQL endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Expected an http or https URL (e.g., 'http://localhost:4000/graphql').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },
}
