//! The flight board: user-facing handlers wired to injected views.
//!
//! A [`FlightBoard`] owns a [`GraphqlClient`] and the views it renders into.
//! Each handler runs one fetch-and-render cycle and never returns an error:
//! failures are logged and shown in the handler's view.
//!
//! # Concurrency
//!
//! Handlers take `&self` and may overlap. Nothing orders their responses, so
//! when two calls target the same view the one that resolves last decides
//! what it shows.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use flight_board::{ClientConfig, FlightBoard, FlightBoardViews, Features};
//! use flight_board::view::{MemoryList, MemoryText};
//!
//! let flights = Arc::new(MemoryList::new());
//! let views = FlightBoardViews::new(
//!     flights.clone(),
//!     Arc::new(MemoryList::new()),
//!     Arc::new(MemoryList::new()),
//!     Arc::new(MemoryText::new()),
//! );
//!
//! let board = FlightBoard::from_config(&ClientConfig::default(), views);
//! board.query_flights().await;
//! println!("{}", flights.to_html());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::config::{ClientConfig, Features};
use crate::filter::{filter_flights, FlightFilter};
use crate::models::{CreatedFlight, FlightInput};
use crate::operations;
use crate::render::{populate_options, render_airlines, render_airports, render_flights};
use crate::view::{ListView, SelectView, TextView};

pub const FLIGHTS_ERROR: &str = "Error fetching flights. Please try again later.";
pub const AIRLINES_ERROR: &str = "Error fetching airlines. Please try again later.";
pub const AIRPORTS_ERROR: &str = "Error fetching airports. Please try again later.";
pub const AIRPORT_ERROR: &str = "Error fetching airport. Please try again later.";
pub const CREATE_FLIGHT_ERROR: &str = "Error creating flight. Please try again later.";

pub const AIRLINE_FILTER_PLACEHOLDER: &str = "All airlines";
pub const DEPARTURE_PLACEHOLDER: &str = "Select departure airport";
pub const ARRIVAL_PLACEHOLDER: &str = "Select arrival airport";

/// Raw values of the create-flight form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlightForm {
    pub flight_number: String,
    pub airline_id: String,
    pub departure_airport_id: String,
    pub arrival_airport_id: String,
    pub departure_time: String,
    pub arrival_time: String,
}

impl From<&FlightForm> for FlightInput {
    fn from(form: &FlightForm) -> Self {
        Self {
            flight_number: form.flight_number.clone(),
            airline: form.airline_id.clone(),
            departure_airport: form.departure_airport_id.clone(),
            arrival_airport: form.arrival_airport_id.clone(),
            departure_time: form.departure_time.clone(),
            arrival_time: form.arrival_time.clone(),
        }
    }
}

/// Sends the form as a `createFlight` mutation and returns the server's echo.
///
/// No field is checked before sending.
///
/// # Errors
///
/// Returns [`GraphqlError`] if the request fails or the server rejects it.
pub async fn submit_flight(
    client: &GraphqlClient,
    form: &FlightForm,
) -> Result<CreatedFlight, GraphqlError> {
    let input = FlightInput::from(form);
    tracing::debug!("Creating flight {}", input.flight_number);
    operations::create_flight(client, &input).await
}

/// The views a board renders into.
///
/// The four required views exist on every page variant; the selects are
/// only touched when their feature is enabled.
#[derive(Clone)]
pub struct FlightBoardViews {
    pub flights: Arc<dyn ListView>,
    pub airlines: Arc<dyn ListView>,
    pub airports: Arc<dyn ListView>,
    pub create_result: Arc<dyn TextView>,
    pub airline_filter: Option<Arc<dyn SelectView>>,
    pub departure_airport: Option<Arc<dyn SelectView>>,
    pub arrival_airport: Option<Arc<dyn SelectView>>,
}

impl FlightBoardViews {
    #[must_use]
    pub fn new(
        flights: Arc<dyn ListView>,
        airlines: Arc<dyn ListView>,
        airports: Arc<dyn ListView>,
        create_result: Arc<dyn TextView>,
    ) -> Self {
        Self {
            flights,
            airlines,
            airports,
            create_result,
            airline_filter: None,
            departure_airport: None,
            arrival_airport: None,
        }
    }

    /// Adds the airline select of the filter bar.
    #[must_use]
    pub fn with_airline_filter(mut self, select: Arc<dyn SelectView>) -> Self {
        self.airline_filter = Some(select);
        self
    }

    /// Adds the departure and arrival airport pickers.
    #[must_use]
    pub fn with_airport_pickers(
        mut self,
        departure: Arc<dyn SelectView>,
        arrival: Arc<dyn SelectView>,
    ) -> Self {
        self.departure_airport = Some(departure);
        self.arrival_airport = Some(arrival);
        self
    }
}

impl fmt::Debug for FlightBoardViews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightBoardViews")
            .field("airline_filter", &self.airline_filter.is_some())
            .field("departure_airport", &self.departure_airport.is_some())
            .field("arrival_airport", &self.arrival_airport.is_some())
            .finish_non_exhaustive()
    }
}

/// A configured flight board.
pub struct FlightBoard {
    client: GraphqlClient,
    views: FlightBoardViews,
    features: Features,
}

impl fmt::Debug for FlightBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightBoard")
            .field("client", &self.client)
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

// Verify FlightBoard is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlightBoard>();
};

impl FlightBoard {
    #[must_use]
    pub fn new(client: GraphqlClient, views: FlightBoardViews, features: Features) -> Self {
        Self {
            client,
            views,
            features,
        }
    }

    /// Builds the client and takes the features from `config`.
    #[must_use]
    pub fn from_config(config: &ClientConfig, views: FlightBoardViews) -> Self {
        Self::new(GraphqlClient::new(config), views, *config.features())
    }

    #[must_use]
    pub const fn features(&self) -> &Features {
        &self.features
    }

    #[must_use]
    pub const fn client(&self) -> &GraphqlClient {
        &self.client
    }

    /// Fetches every flight and renders it.
    pub async fn query_flights(&self) {
        self.show_flights(&FlightFilter::default()).await;
    }

    /// Fetches every flight, keeps those matching `criteria`, renders them.
    ///
    /// Does nothing unless the filter bar is enabled.
    pub async fn apply_filter(&self, criteria: &FlightFilter) {
        if !self.features.filter_bar {
            tracing::warn!("Flight filter requested but the filter bar is disabled");
            return;
        }
        self.show_flights(criteria).await;
    }

    async fn show_flights(&self, criteria: &FlightFilter) {
        let view = self.views.flights.as_ref();
        match operations::fetch_flights(&self.client, self.features.nested_flight_fields).await {
            Ok(flights) if criteria.is_empty() => {
                render_flights(view, &flights, self.features.layout);
            }
            Ok(flights) => {
                let matching = filter_flights(&flights, criteria);
                tracing::debug!("{} of {} flights match the filter", matching.len(), flights.len());
                render_flights(view, &matching, self.features.layout);
            }
            Err(e) => {
                tracing::error!("Error fetching flights: {}", e);
                view.show_message(FLIGHTS_ERROR);
            }
        }
    }

    /// Fetches and lists every airline.
    pub async fn query_airlines(&self) {
        let view = self.views.airlines.as_ref();
        match operations::fetch_airlines(&self.client).await {
            Ok(airlines) => render_airlines(view, &airlines),
            Err(e) => {
                tracing::error!("Error fetching airlines: {}", e);
                view.show_message(AIRLINES_ERROR);
            }
        }
    }

    /// Fetches and lists every airport.
    pub async fn query_airports(&self) {
        let view = self.views.airports.as_ref();
        match operations::fetch_airports(&self.client).await {
            Ok(airports) => render_airports(view, &airports),
            Err(e) => {
                tracing::error!("Error fetching airports: {}", e);
                view.show_message(AIRPORTS_ERROR);
            }
        }
    }

    /// Looks up one airport by code and shows it in the airports view.
    ///
    /// Does nothing unless the airport picker is enabled.
    pub async fn find_airport(&self, code: &str) {
        if !self.features.airport_picker {
            tracing::warn!("Airport lookup requested but the airport picker is disabled");
            return;
        }

        let view = self.views.airports.as_ref();
        match operations::find_airport_by_code(&self.client, code).await {
            Ok(Some(airport)) => render_airports(view, std::slice::from_ref(&airport)),
            Ok(None) => view.show_message(&format!("No airport found with code {code}")),
            Err(e) => {
                tracing::error!("Error fetching airport {}: {}", code, e);
                view.show_message(AIRPORT_ERROR);
            }
        }
    }

    /// Fills the select controls of the enabled features with reference data.
    ///
    /// Failures are only logged; the selects keep their previous options.
    pub async fn load_reference_data(&self) {
        if self.features.filter_bar {
            if let Some(select) = &self.views.airline_filter {
                match operations::fetch_airlines(&self.client).await {
                    Ok(airlines) => {
                        populate_options(select.as_ref(), &airlines, AIRLINE_FILTER_PLACEHOLDER);
                    }
                    Err(e) => tracing::error!("Error loading airlines for the filter: {}", e),
                }
            }
        }

        if self.features.airport_picker {
            let pickers = [
                (&self.views.departure_airport, DEPARTURE_PLACEHOLDER),
                (&self.views.arrival_airport, ARRIVAL_PLACEHOLDER),
            ];
            if pickers.iter().all(|(select, _)| select.is_none()) {
                return;
            }

            match operations::fetch_airports(&self.client).await {
                Ok(airports) => {
                    for (select, placeholder) in pickers {
                        if let Some(select) = select {
                            populate_options(select.as_ref(), &airports, placeholder);
                        }
                    }
                }
                Err(e) => tracing::error!("Error loading airports for the pickers: {}", e),
            }
        }
    }

    /// Submits the create-flight form and shows the outcome.
    pub async fn create_flight(&self, form: &FlightForm) {
        let view = self.views.create_result.as_ref();
        match submit_flight(&self.client, form).await {
            Ok(created) => view.set_text(&created.confirmation()),
            Err(e) => {
                tracing::error!("Error creating flight: {}", e);
                view.set_text(CREATE_FLIGHT_ERROR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{MemoryList, MemorySelect, MemoryText};

    #[test]
    fn test_form_maps_to_input_verbatim() {
        let form = FlightForm {
            flight_number: "AA100".to_string(),
            airline_id: "1".to_string(),
            departure_airport_id: "JFK".to_string(),
            arrival_airport_id: "LAX".to_string(),
            departure_time: "2024-01-01T10:00:00Z".to_string(),
            arrival_time: "not a time".to_string(),
        };

        let input = FlightInput::from(&form);

        assert_eq!(input.airline, "1");
        assert_eq!(input.departure_airport, "JFK");
        assert_eq!(input.arrival_airport, "LAX");
        assert_eq!(input.arrival_time, "not a time");
    }

    #[test]
    fn test_from_config_copies_features() {
        let views = FlightBoardViews::new(
            Arc::new(MemoryList::new()),
            Arc::new(MemoryList::new()),
            Arc::new(MemoryList::new()),
            Arc::new(MemoryText::new()),
        );
        let config = ClientConfig::builder().features(Features::full()).build();

        let board = FlightBoard::from_config(&config, views);

        assert_eq!(board.features(), &Features::full());
        assert_eq!(board.client().endpoint(), config.endpoint());
    }

    #[test]
    fn test_debug_skips_views() {
        let views = FlightBoardViews::new(
            Arc::new(MemoryList::new()),
            Arc::new(MemoryList::new()),
            Arc::new(MemoryList::new()),
            Arc::new(MemoryText::new()),
        )
        .with_airline_filter(Arc::new(MemorySelect::new()));
        assert_eq!(
            format!("{views:?}"),
            "FlightBoardViews { airline_filter: true, departure_airport: false, arrival_airport: false, .. }"
        );

        let board = FlightBoard::from_config(&ClientConfig::default(), views);
        let debug = format!("{board:?}");
        assert!(debug.starts_with("FlightBoard { client: GraphqlClient"));
        assert!(debug.contains("features: Features"));
        assert!(debug.ends_with(", .. }"));
    }

    #[test]
    fn test_flight_board_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlightBoard>();
    }
}
