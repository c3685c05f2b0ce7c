//! Depth-first path search.
//!
//! Enumerates every simple path of flights from the query's origin to its
//! destination, pruning with flight and combination rules as it goes.
//!
//! Depth-first keeps memory proportional to the path length rather than to
//! the width of the frontier, and the price and connection limits cut most
//! branches off early.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{AirportCode, Combination};

use super::graph::FlightGraph;
use super::rules::{LegQuery, Rules};

/// Find every flight combination satisfying the flight and combination rules.
///
/// Combinations come out in exploration order: flights are tried in the
/// order the graph lists them for each airport. Trip rules are not applied
/// here. An unreachable destination yields an empty list.
pub fn find_combinations<'g>(
    graph: &FlightGraph<'g>,
    query: &LegQuery<'_>,
    rules: &Rules,
) -> Vec<Combination<'g>> {
    let mut search = PathSearch {
        graph,
        query,
        rules,
        found: Vec::new(),
        flights_considered: 0,
    };

    let mut path = Combination::start();
    let mut visited = HashSet::from([query.origin]);
    search.explore(query.origin, &mut path, &mut visited);

    debug!(
        origin = %query.origin,
        destination = %query.destination,
        flights_considered = search.flights_considered,
        combinations = search.found.len(),
        "path search complete"
    );

    search.found
}

/// Backtracking state shared across recursive calls.
struct PathSearch<'s, 'g, 'q> {
    graph: &'s FlightGraph<'g>,
    query: &'s LegQuery<'q>,
    rules: &'s Rules,
    found: Vec<Combination<'g>>,
    flights_considered: usize,
}

impl<'g> PathSearch<'_, 'g, '_> {
    /// Extend `path`, which currently ends at `airport`.
    ///
    /// `visited` holds every airport on `path` (and the origin). Both are
    /// restored to their entry state before returning.
    fn explore(
        &mut self,
        airport: AirportCode,
        path: &mut Combination<'g>,
        visited: &mut HashSet<AirportCode>,
    ) {
        if airport == self.query.destination && !path.is_empty() {
            self.found.push(path.clone());
            return;
        }

        let graph = self.graph;
        for &flight in graph.departures_from(airport) {
            let next = flight.destination();
            if visited.contains(&next) {
                continue;
            }

            self.flights_considered += 1;

            if let Some(rule) = self.rules.reject_flight(flight, self.query) {
                trace!(flight = flight.flight_no(), rule, "flight rejected");
                continue;
            }

            path.push(flight);
            match self.rules.reject_combination(path, self.query) {
                Some(rule) => {
                    trace!(
                        flight = flight.flight_no(),
                        legs = path.len(),
                        rule,
                        "combination rejected"
                    );
                }
                None => {
                    visited.insert(next);
                    self.explore(next, path, visited);
                    visited.remove(&next);
                }
            }
            path.pop();
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
