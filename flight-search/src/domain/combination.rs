//! Flight combination type.
//!
//! A `Combination` is a connected, simple walk of flights. It borrows the
//! flights from the graph they were found in, so cloning one while
//! backtracking only copies references.

use std::collections::HashSet;

use chrono::Duration;

use super::{AirportCode, DomainError, Flight, Price};

/// A sequence of connecting flights.
///
/// # Invariants
///
/// - At least one flight (for every combination handed out of the search)
/// - Consecutive flights connect (destination of one = origin of next)
/// - No airport is visited twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'g> {
    flights: Vec<&'g Flight>,
}

impl<'g> Combination<'g> {
    /// Constructs a combination from flights.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty, the flights don't connect, or an
    /// airport is visited twice.
    pub fn new(flights: Vec<&'g Flight>) -> Result<Self, DomainError> {
        let Some(first) = flights.first() else {
            return Err(DomainError::EmptyCombination);
        };

        for window in flights.windows(2) {
            let inbound = window[0].destination();
            let outbound = window[1].origin();
            if inbound != outbound {
                return Err(DomainError::Disconnected(inbound, outbound));
            }
        }

        let mut seen = HashSet::from([first.origin()]);
        for flight in &flights {
            if !seen.insert(flight.destination()) {
                return Err(DomainError::RepeatedAirport(flight.destination()));
            }
        }

        Ok(Combination { flights })
    }

    /// Working buffer for the backtracking search; never handed out empty.
    pub(crate) fn start() -> Self {
        Combination {
            flights: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, flight: &'g Flight) {
        self.flights.push(flight);
    }

    pub(crate) fn pop(&mut self) -> Option<&'g Flight> {
        self.flights.pop()
    }

    /// Returns the flights in travel order.
    pub fn flights(&self) -> &[&'g Flight] {
        &self.flights
    }

    /// Returns the number of flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if no flight has been added yet.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns the first flight.
    pub fn first(&self) -> &'g Flight {
        self.flights[0]
    }

    /// Returns the last flight.
    pub fn last(&self) -> &'g Flight {
        self.flights[self.flights.len() - 1]
    }

    /// Returns the airport the combination starts from.
    pub fn origin(&self) -> AirportCode {
        self.first().origin()
    }

    /// Returns the airport the combination ends at.
    pub fn destination(&self) -> AirportCode {
        self.last().destination()
    }

    /// Returns the number of connections (flights - 1, or 0 for direct).
    pub fn connections(&self) -> usize {
        self.flights.len().saturating_sub(1)
    }

    /// Returns the time from first departure to last arrival, layovers included.
    pub fn travel_time(&self) -> Duration {
        self.last().arrival() - self.first().departure()
    }

    /// Returns the summed price of every flight when travelling with `bags` bags.
    pub fn total_price(&self, bags: u32) -> Price {
        self.flights.iter().map(|f| f.total_price(bags)).sum()
    }

    /// Returns the most restrictive bag allowance across all flights.
    pub fn bags_allowed(&self) -> u32 {
        self.flights
            .iter()
            .map(|f| f.bags_allowed())
            .min()
            .unwrap_or(0)
    }

    /// Returns the waiting time at each connection, in order.
    pub fn layovers(&self) -> impl Iterator<Item = Duration> + '_ {
        self.flights
            .windows(2)
            .map(|w| w[1].departure() - w[0].arrival())
    }

}
