//! GraphQL documents and typed operations against the flight-data API.
//!
//! Each function sends one document through a [`GraphqlClient`] and decodes
//! the field it asks for.

use serde::Deserialize;

use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::models::{Airline, Airport, CreatedFlight, Flight, FlightInput};

/// Flights with airline and airports as plain strings.
pub const FLIGHTS_QUERY: &str = r"
    query {
        flights {
            flightNumber
            airline
            departureAirport
            arrivalAirport
            status
        }
    }
";

/// Flights with nested airline/airport objects and timestamps.
pub const FLIGHTS_NESTED_QUERY: &str = r"
    query {
        flights {
            flightNumber
            airline {
                id
                name
            }
            departureAirport {
                id
                name
                IATA
            }
            arrivalAirport {
                id
                name
                IATA
            }
            departureTime
            arrivalTime
            status
        }
    }
";

pub const AIRLINES_QUERY: &str = r"
    query {
        airlines {
            id
            name
            country
            IATA
            ICAO
            callsign
        }
    }
";

pub const AIRPORTS_QUERY: &str = r"
    query {
        airports {
            id
            name
            city
            country
            IATA
            ICAO
        }
    }
";

pub const FIND_AIRPORT_BY_CODE_QUERY: &str = r"
    query($code: String!) {
        findAirportByCode(code: $code) {
            id
            name
            city
            country
            IATA
            ICAO
        }
    }
";

pub const CREATE_FLIGHT_MUTATION: &str = r"
    mutation($input: FlightInput!) {
        createFlight(input: $input) {
            flightNumber
            status
        }
    }
";

#[derive(Deserialize)]
struct FlightsData {
    flights: Vec<Flight>,
}

#[derive(Deserialize)]
struct AirlinesData {
    airlines: Vec<Airline>,
}

#[derive(Deserialize)]
struct AirportsData {
    airports: Vec<Airport>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FindAirportData {
    find_airport_by_code: Option<Airport>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateFlightData {
    create_flight: CreatedFlight,
}

/// Fetches all flights, flattened or nested.
///
/// # Errors
///
/// Returns [`GraphqlError`] if the request fails or `data.flights` is not a
/// list of flights.
pub async fn fetch_flights(
    client: &GraphqlClient,
    nested: bool,
) -> Result<Vec<Flight>, GraphqlError> {
    let query = if nested {
        FLIGHTS_NESTED_QUERY
    } else {
        FLIGHTS_QUERY
    };
    let data: FlightsData = client.query(query, None).await?;
    Ok(data.flights)
}

/// Fetches all airlines.
///
/// # Errors
///
/// Returns [`GraphqlError`] if the request fails or the data does not decode.
pub async fn fetch_airlines(client: &GraphqlClient) -> Result<Vec<Airline>, GraphqlError> {
    let data: AirlinesData = client.query(AIRLINES_QUERY, None).await?;
    Ok(data.airlines)
}

/// Fetches all airports.
///
/// # Errors
///
/// Returns [`GraphqlError`] if the request fails or the data does not decode.
pub async fn fetch_airports(client: &GraphqlClient) -> Result<Vec<Airport>, GraphqlError> {
    let data: AirportsData = client.query(AIRPORTS_QUERY, None).await?;
    Ok(data.airports)
}

/// Looks up one airport by IATA or ICAO code. `Ok(None)` means the server
/// knows no such airport.
///
/// # Errors
///
/// Returns [`GraphqlError`] if the request fails or the data does not decode.
pub async fn find_airport_by_code(
    client: &GraphqlClient,
    code: &str,
) -> Result<Option<Airport>, GraphqlError> {
    let variables = serde_json::json!({ "code": code });
    let data: FindAirportData = client
        .query(FIND_AIRPORT_BY_CODE_QUERY, Some(variables))
        .await?;
    Ok(data.find_airport_by_code)
}

/// Runs the `createFlight` mutation with `input` as `variables.input`.
///
/// # Errors
///
/// Returns [`GraphqlError`] if the request fails, the server rejects the
/// input, or the echo does not decode.
pub async fn create_flight(
    client: &GraphqlClient,
    input: &FlightInput,
) -> Result<CreatedFlight, GraphqlError> {
    let variables = serde_json::json!({ "input": input });
    let data: CreateFlightData = client
        .query(CREATE_FLIGHT_MUTATION, Some(variables))
        .await?;
    Ok(data.create_flight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_name_their_root_fields() {
        assert!(FLIGHTS_QUERY.contains("flights"));
        assert!(FLIGHTS_NESTED_QUERY.contains("departureTime"));
        assert!(AIRLINES_QUERY.contains("callsign"));
        assert!(AIRPORTS_QUERY.contains("city"));
        assert!(FIND_AIRPORT_BY_CODE_QUERY.contains("findAirportByCode(code: $code)"));
        assert!(CREATE_FLIGHT_MUTATION.contains("createFlight(input: $input)"));
    }

    #[test]
    fn test_flattened_query_does_not_nest_selections() {
        let inner = FLIGHTS_QUERY
            .split_once("flights")
            .map(|(_, rest)| rest)
            .unwrap();
        assert_eq!(inner.matches('{').count(), 1);
    }

    #[test]
    fn test_find_airport_data_accepts_null() {
        let data: FindAirportData =
            serde_json::from_value(serde_json::json!({"findAirportByCode": null})).unwrap();
        assert!(data.find_airport_by_code.is_none());
    }
}
