//! Configuration types for the flight board client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: endpoint, enabled features and user agent settings
//! - [`ClientConfigBuilder`]: fluent builder for [`ClientConfig`]
//! - [`Endpoint`]: a validated GraphQL endpoint URL
//! - [`Features`]: which optional parts of the board are active
//! - [`FlightLayout`]: list or table rendering of flights
//!
//! # Example
//!
//! ```rust
//! use flight_board::{ClientConfig, Endpoint, Features};
//!
//! let config = ClientConfig::builder()
//!     .endpoint(Endpoint::new("http://localhost:4000/graphql").unwrap())
//!     .features(Features::full())
//!     .build();
//!
//! assert!(config.features().filter_bar);
//! ```

mod newtypes;

pub use newtypes::{Endpoint, DEFAULT_ENDPOINT};

/// How flights are laid out when rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlightLayout {
    /// One text line per flight, suited to an unordered list.
    #[default]
    List,
    /// Five cells per flight (time, route, airline, flight number, status),
    /// suited to a table body.
    Table,
}

/// Optional parts of the flight board.
///
/// Every page variant of the board is a combination of these switches.
/// [`Features::default`] is the plain list page; [`Features::full`] turns on
/// everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    /// Enables the filter bar and the airline filter select.
    pub filter_bar: bool,
    /// Enables airport lookup by code and the airport pickers.
    pub airport_picker: bool,
    /// Requests nested airline/airport objects and departure/arrival times.
    pub nested_flight_fields: bool,
    /// Layout used for the flights container.
    pub layout: FlightLayout,
}

impl Features {
    /// Returns a feature set with every optional part enabled and the table
    /// layout selected.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            filter_bar: true,
            airport_picker: true,
            nested_flight_fields: true,
            layout: FlightLayout::Table,
        }
    }
}

/// Configuration for the flight board client.
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    endpoint: Endpoint,
    features: Features,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the enabled features.
    #[must_use]
    pub const fn features(&self) -> &Features {
        &self.features
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfigBuilder::new().build()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `endpoint`: `http://localhost:4000/graphql`
/// - `features`: [`Features::default`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<Endpoint>,
    features: Option<Features>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the enabled features.
    #[must_use]
    pub const fn features(mut self, features: Features) -> Self {
        self.features = Some(features);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// Every field has a default, so building cannot fail; invalid endpoints
    /// are already rejected by [`Endpoint::new`].
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
