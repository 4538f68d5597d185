//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The endpoint every variant of the flight board talks to out of the box.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// A validated GraphQL endpoint URL.
///
/// Only `http` and `https` URLs with a non-empty host are accepted. The
/// scheme is stored lowercased; ports, paths and query strings are kept
/// verbatim.
///
/// # Example
///
/// ```rust
/// use flight_board::Endpoint;
///
/// let endpoint = Endpoint::new("http://localhost:4000/graphql").unwrap();
/// assert_eq!(endpoint.scheme(), "http");
/// assert_eq!(endpoint.host_name(), "localhost");
/// assert_eq!(endpoint.as_ref(), "http://localhost:4000/graphql");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        let url = format!("{scheme}{}", &url[scheme_end..]);
        Ok(Self {
            scheme_end,
            host_start,
            host_end,
            url,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        // "http://" is 7 bytes, "localhost" ends at 16.
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            scheme_end: 4,
            host_start: 7,
            host_end: 16,
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
