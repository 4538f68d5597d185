use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An airline or airport reference inside a flight.
///
/// The flattened `flights` query returns plain strings; the nested variant
/// returns objects. Both display as the name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamedRef {
    /// A bare name or code.
    Name(String),
    /// A nested object with at least a name.
    Object {
        #[serde(default, deserialize_with = "super::optional_id")]
        id: Option<String>,
        #[serde(default, deserialize_with = "super::nullable_string")]
        name: String,
    },
}

impl NamedRef {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Object { name, .. } => name,
        }
    }

    /// Returns the id of a nested reference.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Name(_) => None,
            Self::Object { id, .. } => id.as_deref(),
        }
    }
}

impl Default for NamedRef {
    fn default() -> Self {
        Self::Name(String::new())
    }
}

impl fmt::Display for NamedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A flight, as returned by the `flights` query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Flight designator, such as `AA100`.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub flight_number: String,
    /// Operating airline.
    #[serde(default, deserialize_with = "named_ref")]
    pub airline: NamedRef,
    /// Origin airport.
    #[serde(default, deserialize_with = "named_ref")]
    pub departure_airport: NamedRef,
    /// Destination airport.
    #[serde(default, deserialize_with = "named_ref")]
    pub arrival_airport: NamedRef,
    /// ISO-8601 timestamp; only requested by the nested query.
    #[serde(default)]
    pub departure_time: Option<String>,
    /// ISO-8601 timestamp; only requested by the nested query.
    #[serde(default)]
    pub arrival_time: Option<String>,
    /// Free-form status such as `On Time` or `Delayed`.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub status: String,
}

/// Deserializes a reference, mapping `null` to an empty name.
fn named_ref<'de, D>(deserializer: D) -> Result<NamedRef, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NamedRef>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload of the `createFlight` mutation.
///
/// Values are passed through exactly as entered; the server is the only
/// validator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInput {
    /// Flight designator.
    pub flight_number: String,
    /// Airline id.
    pub airline: String,
    /// Departure airport id.
    pub departure_airport: String,
    /// Arrival airport id.
    pub arrival_airport: String,
    /// Departure time as entered.
    pub departure_time: String,
    /// Arrival time as entered.
    pub arrival_time: String,
}

/// The server's echo of a created flight.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFlight {
    /// Designator the server stored.
    pub flight_number: String,
    /// Initial status assigned by the server.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub status: String,
}

impl CreatedFlight {
    /// The confirmation line shown after a successful creation.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Flight {} created with status {}",
            self.flight_number, self.status
        )
    }
}
