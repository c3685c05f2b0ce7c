//! Flight graph for path search.
//!
//! Airports are nodes and flights are directed edges. Several flights may
//! link the same pair of airports; every one of them is kept, since they
//! differ in schedule, price and bag allowance.

use std::collections::HashMap;

use crate::domain::{AirportCode, Flight};

/// Index of flights keyed by the airport they depart from.
///
/// This allows O(1) lookup of "which flights leave airport X?". The graph
/// borrows the flights; it is read-only once built.
#[derive(Debug, Default)]
pub struct FlightGraph<'f> {
    departures: HashMap<AirportCode, Vec<&'f Flight>>,
    flight_count: usize,
}

impl<'f> FlightGraph<'f> {
    /// Build the graph from a flight table.
    ///
    /// Flights are grouped by origin, keeping input order within each group.
    /// That order is the order the search explores them in, which in turn
    /// decides the order of equally priced trips.
    pub fn build<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = &'f Flight>,
    {
        let mut departures: HashMap<AirportCode, Vec<&'f Flight>> = HashMap::new();
        let mut flight_count = 0;

        for flight in flights {
            departures.entry(flight.origin()).or_default().push(flight);
            flight_count += 1;
        }

        Self {
            departures,
            flight_count,
        }
    }

    /// Get flights leaving an airport, in input order.
    pub fn departures_from(&self, airport: AirportCode) -> &[&'f Flight] {
        self.departures
            .get(&airport)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check if any flight leaves the airport.
    pub fn has_departures(&self, airport: AirportCode) -> bool {
        self.departures.contains_key(&airport)
    }

    /// Get the number of airports with at least one departure.
    pub fn airport_count(&self) -> usize {
        self.departures.len()
    }

    /// Get the total number of flights.
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }
}
