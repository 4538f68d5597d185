use serde::{Deserialize, Serialize};

use super::OptionItem;

/// An airline, as returned by the `airlines` query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    /// Server-assigned id, string or numeric on the wire.
    #[serde(deserialize_with = "super::id")]
    pub id: String,
    /// Airline name.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub name: String,
    /// Country of registration.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub country: String,
    /// Two-letter IATA code.
    #[serde(rename = "IATA", default, deserialize_with = "super::nullable_string")]
    pub iata: String,
    /// Three-letter ICAO code.
    #[serde(rename = "ICAO", default, deserialize_with = "super::nullable_string")]
    pub icao: String,
    /// Radio callsign.
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub callsign: String,
}

impl OptionItem for Airline {
    fn option_value(&self) -> &str {
        &self.id
    }

    fn option_label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_airline_deserializes_wire_names() {
        let airline: Airline = serde_json::from_value(json!({
            "id": 7,
            "name": "Delta Air Lines",
            "country": "United States",
            "IATA": "DL",
            "ICAO": "DAL",
            "callsign": "DELTA"
        }))
        .unwrap();

        assert_eq!(airline.id, "7");
        assert_eq!(airline.iata, "DL");
        assert_eq!(airline.icao, "DAL");
        assert_eq!(airline.callsign, "DELTA");
    }

    #[test]
    fn test_airline_tolerates_missing_and_null_fields() {
        let airline: Airline =
            serde_json::from_value(json!({"id": "1", "name": "Delta", "IATA": null})).unwrap();

        assert_eq!(airline.iata, "");
        assert_eq!(airline.country, "");
        assert_eq!(airline.option_value(), "1");
        assert_eq!(airline.option_label(), "Delta");
    }
}
