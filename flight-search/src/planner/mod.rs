//! Trip planner using depth-first path search.
//!
//! This module implements the core search: flights form a directed
//! multigraph over airports, every simple path from origin to destination
//! is enumerated with backtracking, and three tiers of rules (per flight,
//! per partial path, per finished trip) prune and validate the candidates.
//! Surviving trips are ranked by price.

mod assemble;
mod config;
mod graph;
mod plan;
mod rank;
mod rules;
mod search;

pub use assemble::{AssembledTrips, assemble_trips};
pub use config::SearchConfig;
pub use graph::FlightGraph;
pub use plan::{Planner, SearchError, SearchRequest, SearchResult, search_trips};
pub use rank::rank_trips;
pub use rules::{
    CombinationRule, FlightRule, LegQuery, RuleSet, Rules, TripQuery, TripRule,
    combination_within_price, departs_on_or_after_date, ends_at_destination,
    flight_takes_bags, flight_within_price, layovers_within_bounds, matches_trip_kind,
    returns_after_arrival, starts_at_origin, trip_takes_bags, trip_within_price,
    within_connection_limit,
};
pub use search::find_combinations;
