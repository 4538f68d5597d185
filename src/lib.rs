//! # Flight Board Client
//!
//! A client for a flight-data GraphQL API that renders flights, airlines and
//! airports into host-supplied views.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration via [`ClientConfig`] and [`ClientConfigBuilder`], with a
//!   validated [`Endpoint`] and a [`Features`] set selecting the page variant
//! - A GraphQL request dispatcher, [`GraphqlClient`], that turns `errors`
//!   arrays into [`GraphqlError`]s
//! - Typed operations for `flights`, `airlines`, `airports`,
//!   `findAirportByCode` and `createFlight` in [`operations`]
//! - Client-side filtering via [`FlightFilter`] and [`filter_flights`]
//! - Rendering into [`view`] traits, with in-memory views included
//! - A [`FlightBoard`] that wires all of the above to user actions
//!
//! ## Quick Start
//!
//! ```rust
//! use flight_board::{ClientConfig, Endpoint, Features, FlightLayout};
//!
//! let config = ClientConfig::builder()
//!     .endpoint(Endpoint::new("http://localhost:4000/graphql").unwrap())
//!     .features(Features {
//!         filter_bar: true,
//!         layout: FlightLayout::Table,
//!         ..Features::default()
//!     })
//!     .build();
//!
//! assert_eq!(config.endpoint().host_name(), "localhost");
//! ```
//!
//! ## Handling Actions
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use flight_board::{FlightBoard, FlightBoardViews, FlightFilter, FlightForm};
//! use flight_board::view::{MemoryList, MemoryText};
//!
//! let board = FlightBoard::from_config(&config, views);
//!
//! board.query_flights().await;
//! board.apply_filter(&FlightFilter::default().status("Delayed")).await;
//! board.create_flight(&FlightForm {
//!     flight_number: "AA100".into(),
//!     airline_id: "1".into(),
//!     departure_airport_id: "JFK".into(),
//!     arrival_airport_id: "LAX".into(),
//!     departure_time: "2024-01-01T10:00:00Z".into(),
//!     arrival_time: "2024-01-01T13:00:00Z".into(),
//! }).await;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the endpoint and every view are passed in explicitly
//! - **Errors stop at the board**: handlers log and display failures, never return them
//! - **No resilience layer**: one request per action, no retries, no timeouts
//! - **Thread-safe**: the client, the board and the in-memory views are `Send + Sync`

pub mod board;
pub mod clients;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod operations;
pub mod render;
pub mod view;

pub use board::{submit_flight, FlightBoard, FlightBoardViews, FlightForm};
pub use clients::{GraphqlClient, GraphqlError, HttpError};
pub use config::{ClientConfig, ClientConfigBuilder, Endpoint, Features, FlightLayout};
pub use error::ConfigError;
pub use filter::{filter_flights, FlightFilter};
pub use models::{Airline, Airport, CreatedFlight, Flight, FlightInput, NamedRef, OptionItem};
pub use render::{populate_options, render_flights};
