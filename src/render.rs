//! Rendering of fetched data into views.
//!
//! Every render clears its target first, so a view only ever shows the
//! result of the last render that reached it.

use chrono::{DateTime, NaiveDateTime};

use crate::config::FlightLayout;
use crate::models::{Airline, Airport, Flight, OptionItem};
use crate::view::{ListView, SelectView};

/// Shown in the time cell when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a timestamp as `HH:MM`.
///
/// RFC 3339 timestamps are shown in UTC; timestamps without an offset (as
/// produced by `datetime-local` inputs) are shown as written. An absent
/// timestamp yields `""`, an unparseable one [`INVALID_DATE`].
#[must_use]
pub fn format_clock(timestamp: Option<&str>) -> String {
    let Some(timestamp) = timestamp.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.naive_utc().format("%H:%M").to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map_or_else(
            || INVALID_DATE.to_string(),
            |parsed| parsed.format("%H:%M").to_string(),
        )
}

/// Returns the cells of one flight row for the given layout.
#[must_use]
pub fn flight_cells(flight: &Flight, layout: FlightLayout) -> Vec<String> {
    match layout {
        FlightLayout::List => vec![format!(
            "{} - {} - {} to {} - {}",
            flight.flight_number,
            flight.airline,
            flight.departure_airport,
            flight.arrival_airport,
            flight.status
        )],
        FlightLayout::Table => vec![
            format_clock(flight.departure_time.as_deref()),
            format!("{} to {}", flight.departure_airport, flight.arrival_airport),
            flight.airline.to_string(),
            flight.flight_number.clone(),
            flight.status.clone(),
        ],
    }
}

/// Replaces the view's content with one row per flight, in order.
pub fn render_flights(view: &dyn ListView, flights: &[Flight], layout: FlightLayout) {
    view.clear();
    for flight in flights {
        view.append_row(flight_cells(flight, layout));
    }
}

/// Replaces the view's content with one `"{name} ({IATA}) - {country}"`
/// line per airline.
pub fn render_airlines(view: &dyn ListView, airlines: &[Airline]) {
    view.clear();
    for airline in airlines {
        view.append_row(vec![format!(
            "{} ({}) - {}",
            airline.name, airline.iata, airline.country
        )]);
    }
}

/// Replaces the view's content with one
/// `"{name} ({IATA}) - {city}, {country}"` line per airport.
pub fn render_airports(view: &dyn ListView, airports: &[Airport]) {
    view.clear();
    for airport in airports {
        view.append_row(vec![format!(
            "{} ({}) - {}, {}",
            airport.name, airport.iata, airport.city, airport.country
        )]);
    }
}

/// Refills a select control: the placeholder (empty value) first, then one
/// option per item in item order.
pub fn populate_options<T: OptionItem>(select: &dyn SelectView, items: &[T], placeholder: &str) {
    select.clear();
    select.add_option("", placeholder);
    for item in items {
        select.add_option(item.option_value(), item.option_label());
    }
}
