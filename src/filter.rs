//! Client-side flight filtering.
//!
//! A linear scan over the last fetch; no index is kept.

use crate::models::{Flight, NamedRef};

/// Filter criteria from the filter bar.
///
/// `None` and `""` both mean "any". Comparisons are exact and
/// case-sensitive.
///
/// # Example
///
/// ```rust
/// use flight_board::{filter_flights, Flight, FlightFilter};
///
/// let flights = vec![
///     Flight { flight_number: "AA1".into(), status: "Delayed".into(), ..Flight::default() },
///     Flight { flight_number: "AA2".into(), status: "On Time".into(), ..Flight::default() },
/// ];
///
/// let delayed = filter_flights(&flights, &FlightFilter::default().status("Delayed"));
/// assert_eq!(delayed.len(), 1);
/// assert_eq!(delayed[0].flight_number, "AA1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub flight_number: Option<String>,
    /// Airline name, or id for nested airlines.
    pub airline: Option<String>,
    pub status: Option<String>,
}

impl FlightFilter {
    #[must_use]
    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = Some(flight_number.into());
        self
    }

    #[must_use]
    pub fn airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = Some(airline.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns `true` if no criterion is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        active(self.flight_number.as_ref()).is_none()
            && active(self.airline.as_ref()).is_none()
            && active(self.status.as_ref()).is_none()
    }

    /// Returns `true` if `flight` satisfies every supplied criterion.
    #[must_use]
    pub fn matches(&self, flight: &Flight) -> bool {
        active(self.flight_number.as_ref()).map_or(true, |n| flight.flight_number == n)
            && active(self.airline.as_ref()).map_or(true, |a| airline_matches(&flight.airline, a))
            && active(self.status.as_ref()).map_or(true, |s| flight.status == s)
    }
}

fn active(criterion: Option<&String>) -> Option<&str> {
    criterion.map(String::as_str).filter(|c| !c.is_empty())
}

fn airline_matches(airline: &NamedRef, criterion: &str) -> bool {
    airline.name() == criterion || airline.id() == Some(criterion)
}

/// Returns the flights matching `criteria`, in input order.
#[must_use]
pub fn filter_flights(flights: &[Flight], criteria: &FlightFilter) -> Vec<Flight> {
    flights
        .iter()
        .filter(|flight| criteria.matches(flight))
        .cloned()
        .collect()
}
