//! Data transfer objects for search output.

use chrono::Duration;
use serde::Serialize;

use crate::domain::{Flight, Price, Trip};
use crate::loader::TIMESTAMP_FORMAT;

/// A trip in search results.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Flights in travel order (outbound, then return)
    pub flights: Vec<FlightResult>,

    /// Most bags every flight accepts
    pub bags_allowed: u32,

    /// Bags the trip was priced for
    pub bags_count: u32,

    /// Where the trip ends; the origin again for round trips
    pub destination: String,

    /// Where the trip starts
    pub origin: String,

    /// Total price including bag fees
    pub total_price: Price,

    /// Time in the air plus layovers, excluding the stay between legs
    pub travel_time: String,

    /// Number of flights minus one
    pub connections: usize,
}

/// A flight within a trip.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub base_price: Price,
    pub bag_price: Price,
    pub bags_allowed: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
}

impl TripResult {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            flights: trip.flights().iter().map(FlightResult::from_flight).collect(),
            bags_allowed: trip.bags_allowed(),
            bags_count: trip.bags_count(),
            destination: trip.destination().to_string(),
            origin: trip.origin().to_string(),
            total_price: trip.total_price(),
            travel_time: format_travel_time(trip.travel_time()),
            connections: trip.connections(),
        }
    }
}

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no().to_string(),
            origin: flight.origin().to_string(),
            destination: flight.destination().to_string(),
            departure: flight.departure().format(TIMESTAMP_FORMAT).to_string(),
            arrival: flight.arrival().format(TIMESTAMP_FORMAT).to_string(),
            base_price: flight.base_price(),
            bag_price: flight.bag_price(),
            bags_allowed: flight.bags_allowed(),
            airline: flight.airline().map(str::to_string),
        }
    }
}

/// Format a travel time as `H:MM:SS`, with a `N day(s), ` prefix past a day.
///
/// ```
/// use chrono::Duration;
/// use flight_search::report::format_travel_time;
///
/// assert_eq!(format_travel_time(Duration::minutes(150)), "2:30:00");
/// assert_eq!(format_travel_time(Duration::hours(49)), "2 days, 1:00:00");
/// ```
pub fn format_travel_time(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let clock = format!("{hours}:{minutes:02}:{seconds:02}");
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}
