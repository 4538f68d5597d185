//! View models for the flight-data API.
//!
//! Everything here is request-scoped: created from a response, held for one
//! render pass, then dropped.
//!
//! - [`Flight`] and [`NamedRef`]: flights in flattened or nested form
//! - [`Airline`], [`Airport`]: reference data
//! - [`FlightInput`], [`CreatedFlight`]: the `createFlight` mutation payload and echo
//! - [`OptionItem`]: anything that can fill a select control

mod airline;
mod airport;
mod flight;

pub use airline::Airline;
pub use airport::Airport;
pub use flight::{CreatedFlight, Flight, FlightInput, NamedRef};

use serde::{Deserialize, Deserializer};

/// Reference data that can be offered as a select option.
pub trait OptionItem {
    /// The option value (the entity id).
    fn option_value(&self) -> &str;
    /// The option label (the entity name).
    fn option_label(&self) -> &str;
}

/// Identifiers arrive as strings or numbers depending on the server.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

/// Deserializes a string or numeric id into a `String`.
fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Deserializes an optional string or numeric id.
fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

/// Deserializes a nullable string, mapping `null` to `""`.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
