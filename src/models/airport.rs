use serde::{Deserialize, Serialize};

use super::OptionItem;

/// An airport, as returned by the `airports` and `findAirportByCode` queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Server-assigned id, string or numeric on the wire.
    #[serde(deserialize_with = "super::id")]
    pub id: String,
    /// Airport name.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub name: String,
    /// City served.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub city: String,
    /// Country name.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub country: String,
    /// Three-letter IATA code.
    #[serde(rename = "IATA", default, deserialize_with = "super::nullable_string")]
    pub iata: String,
    /// Four-letter ICAO code.
    #[serde(rename = "ICAO", default, deserialize_with = "super::nullable_string")]
    pub icao: String,
}

impl OptionItem for Airport {
    fn option_value(&self) -> &str {
        &self.id
    }

    fn option_label(&self) -> &str {
        &self.name
    }
}
