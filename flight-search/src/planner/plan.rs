//! Trip planning.
//!
//! Ties the pieces together: path search for the outbound leg, a second
//! search for the way back on round trips, trip assembly and ranking.

use tracing::{debug, info};

use crate::domain::{AirportCode, Flight, Trip};

use super::assemble::assemble_trips;
use super::config::SearchConfig;
use super::graph::FlightGraph;
use super::rank::rank_trips;
use super::rules::{LegQuery, Rules, TripQuery};
use super::search::find_combinations;

/// Error from trip search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request or configuration
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Request for trip search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the trip starts (and, for round trips, ends).
    pub origin: AirportCode,

    /// Where the outbound leg goes.
    pub destination: AirportCode,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: AirportCode, destination: AirportCode) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::InvalidRequest(format!(
                "origin and destination are both {}",
                self.origin
            )));
        }

        Ok(())
    }
}

/// Result of trip search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Eligible trips, cheapest first.
    pub trips: Vec<Trip>,

    /// Combinations found from origin to destination.
    pub outbound_combinations: usize,

    /// Combinations found for the way back (0 for one-way searches).
    pub return_combinations: usize,

    /// Candidates discarded by trip rules.
    pub rejected: usize,
}

/// Trip planner over a prebuilt flight graph.
pub struct Planner<'a, 'g> {
    graph: &'a FlightGraph<'g>,
    config: &'a SearchConfig,
    rules: Rules,
}

impl<'a, 'g> Planner<'a, 'g> {
    /// Create a planner using the default rules.
    pub fn new(graph: &'a FlightGraph<'g>, config: &'a SearchConfig) -> Self {
        Self::with_rules(graph, config, Rules::default())
    }

    /// Create a planner with a custom set of rules.
    pub fn with_rules(graph: &'a FlightGraph<'g>, config: &'a SearchConfig, rules: Rules) -> Self {
        Self {
            graph,
            config,
            rules,
        }
    }

    /// Search for trips from origin to destination (and back, if configured).
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;
        self.config.validate()?;

        if !self.graph.has_departures(request.origin) {
            debug!(origin = %request.origin, "no flights leave the origin");
            return Ok(SearchResult {
                trips: Vec::new(),
                outbound_combinations: 0,
                return_combinations: 0,
                rejected: 0,
            });
        }

        let outbound_query = LegQuery::outbound(request.origin, request.destination, self.config);
        let outbound = find_combinations(self.graph, &outbound_query, &self.rules);

        let inbound = if self.config.round_trip {
            let inbound_query =
                LegQuery::inbound(request.origin, request.destination, self.config);
            Some(find_combinations(self.graph, &inbound_query, &self.rules))
        } else {
            None
        };

        let trip_query = TripQuery {
            origin: request.origin,
            destination: request.destination,
            config: self.config,
        };
        let assembled = assemble_trips(&outbound, inbound.as_deref(), &trip_query, &self.rules);
        let return_combinations = inbound.as_ref().map_or(0, Vec::len);
        let trips = rank_trips(assembled.trips);

        info!(
            origin = %request.origin,
            destination = %request.destination,
            round_trip = self.config.round_trip,
            trips = trips.len(),
            "search complete"
        );

        Ok(SearchResult {
            trips,
            outbound_combinations: outbound.len(),
            return_combinations,
            rejected: assembled.rejected,
        })
    }
}

/// Search a flight table in one call: build the graph, plan, rank.
pub fn search_trips(
    flights: &[Flight],
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<Vec<Trip>, SearchError> {
    let graph = FlightGraph::build(flights);
    let planner = Planner::new(&graph, config);
    Ok(planner.search(request)?.trips)
}
