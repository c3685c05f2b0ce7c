//! Eligibility rules.
//!
//! Constraints are checked at three points:
//!
//! 1. **Flight rules** when a flight is considered as the next hop.
//! 2. **Combination rules** on the partial path once that flight is appended.
//! 3. **Trip rules** on a finished outbound (plus return) candidate.
//!
//! Each tier is a named list of plain predicates and a candidate is kept only
//! if every predicate of the tier accepts it. New constraints are added by
//! inserting an entry; the search itself never changes.

use chrono::NaiveDate;

use crate::domain::{AirportCode, Combination, Flight, TripCandidate};

use super::config::SearchConfig;

/// What a single run of the path search is looking for.
///
/// For the return leg of a round trip, origin and destination are swapped
/// and `departure_date` is the configured return date.
#[derive(Debug, Clone, Copy)]
pub struct LegQuery<'c> {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure_date: Option<NaiveDate>,
    pub config: &'c SearchConfig,
}

impl<'c> LegQuery<'c> {
    /// Query for the outbound leg.
    pub fn outbound(origin: AirportCode, destination: AirportCode, config: &'c SearchConfig) -> Self {
        Self {
            origin,
            destination,
            departure_date: config.departure_date,
            config,
        }
    }

    /// Query for the way back from `destination` to `origin`.
    pub fn inbound(origin: AirportCode, destination: AirportCode, config: &'c SearchConfig) -> Self {
        Self {
            origin: destination,
            destination: origin,
            departure_date: config.return_date,
            config,
        }
    }
}

/// What a whole trip must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct TripQuery<'c> {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub config: &'c SearchConfig,
}

pub type FlightRule = fn(&Flight, &LegQuery<'_>) -> bool;
pub type CombinationRule = fn(&Combination<'_>, &LegQuery<'_>) -> bool;
pub type TripRule = fn(&TripCandidate<'_, '_>, &TripQuery<'_>) -> bool;

/// An ordered set of named predicates.
#[derive(Debug, Clone)]
pub struct RuleSet<R> {
    rules: Vec<(&'static str, R)>,
}

impl<R> RuleSet<R> {
    /// Create an empty set (accepts everything).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule, replacing any existing rule with the same name.
    pub fn with(mut self, name: &'static str, rule: R) -> Self {
        self.insert(name, rule);
        self
    }

    /// Add a rule, replacing any existing rule with the same name.
    pub fn insert(&mut self, name: &'static str, rule: R) {
        match self.rules.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = rule,
            None => self.rules.push((name, rule)),
        }
    }

    /// Remove a rule by name. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|(n, _)| *n != name);
        self.rules.len() != before
    }

    /// Returns the rule names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the name of the first rule for which `accepts` is false.
    pub fn first_rejection(&self, mut accepts: impl FnMut(&R) -> bool) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(_, rule)| !accepts(rule))
            .map(|(name, _)| *name)
    }
}

impl<R> Default for RuleSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// The three rule tiers used by a search.
#[derive(Debug, Clone)]
pub struct Rules {
    pub flight: RuleSet<FlightRule>,
    pub combination: RuleSet<CombinationRule>,
    pub trip: RuleSet<TripRule>,
}

impl Rules {
    /// Returns the name of the first flight rule rejecting `flight`.
    pub fn reject_flight(&self, flight: &Flight, query: &LegQuery<'_>) -> Option<&'static str> {
        self.flight.first_rejection(|rule| rule(flight, query))
    }

    /// Returns the name of the first combination rule rejecting `combination`.
    pub fn reject_combination(
        &self,
        combination: &Combination<'_>,
        query: &LegQuery<'_>,
    ) -> Option<&'static str> {
        self.combination.first_rejection(|rule| rule(combination, query))
    }

    /// Returns the name of the first trip rule rejecting `candidate`.
    pub fn reject_trip(
        &self,
        candidate: &TripCandidate<'_, '_>,
        query: &TripQuery<'_>,
    ) -> Option<&'static str> {
        self.trip.first_rejection(|rule| rule(candidate, query))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            flight: RuleSet::<FlightRule>::new()
                .with("bags", flight_takes_bags)
                .with("departure_date", departs_on_or_after_date)
                .with("flight_price", flight_within_price),
            combination: RuleSet::<CombinationRule>::new()
                .with("layover", layovers_within_bounds)
                .with("max_connections", within_connection_limit)
                .with("max_price", combination_within_price),
            trip: RuleSet::<TripRule>::new()
                .with("origin", starts_at_origin)
                .with("destination", ends_at_destination)
                .with("round_trip", matches_trip_kind)
                .with("bags", trip_takes_bags)
                .with("max_price", trip_within_price)
                .with("return_after_outbound", returns_after_arrival),
        }
    }
}

// Flight rules

/// The flight accepts at least the requested number of bags.
pub fn flight_takes_bags(flight: &Flight, query: &LegQuery<'_>) -> bool {
    flight.bags_allowed() >= query.config.bags
}

/// The flight departs on or after the date requested for this leg.
pub fn departs_on_or_after_date(flight: &Flight, query: &LegQuery<'_>) -> bool {
    query
        .departure_date
        .is_none_or(|date| flight.departure().date() >= date)
}

/// The flight alone does not exceed the price cap. Prices are never
/// negative, so a trip containing it could not either.
pub fn flight_within_price(flight: &Flight, query: &LegQuery<'_>) -> bool {
    query
        .config
        .max_price
        .is_none_or(|max| flight.total_price(query.config.bags) <= max)
}

// Combination rules

/// Every connection leaves enough, but not too much, time on the ground.
pub fn layovers_within_bounds(combination: &Combination<'_>, query: &LegQuery<'_>) -> bool {
    let min = query.config.min_layover();
    let max = query.config.max_layover();
    combination
        .layovers()
        .all(|layover| min <= layover && layover <= max)
}

/// The combination does not exceed the connection limit.
pub fn within_connection_limit(combination: &Combination<'_>, query: &LegQuery<'_>) -> bool {
    query
        .config
        .max_connections
        .is_none_or(|max| combination.connections() <= max)
}

/// The combination so far does not exceed the price cap.
pub fn combination_within_price(combination: &Combination<'_>, query: &LegQuery<'_>) -> bool {
    query
        .config
        .max_price
        .is_none_or(|max| combination.total_price(query.config.bags) <= max)
}

// Trip rules

/// The trip starts where the traveller is.
pub fn starts_at_origin(candidate: &TripCandidate<'_, '_>, query: &TripQuery<'_>) -> bool {
    candidate.outbound.origin() == query.origin
}

/// The outbound leg ends at the destination and any return leg goes from
/// there back to the origin.
pub fn ends_at_destination(candidate: &TripCandidate<'_, '_>, query: &TripQuery<'_>) -> bool {
    candidate.outbound.destination() == query.destination
        && candidate
            .inbound
            .is_none_or(|c| c.origin() == query.destination && c.destination() == query.origin)
}

/// Round-trip searches only yield round trips and vice versa.
pub fn matches_trip_kind(candidate: &TripCandidate<'_, '_>, query: &TripQuery<'_>) -> bool {
    candidate.inbound.is_some() == query.config.round_trip
}

/// Every leg of the trip accepts the requested number of bags.
pub fn trip_takes_bags(candidate: &TripCandidate<'_, '_>, query: &TripQuery<'_>) -> bool {
    candidate.bags_allowed() >= query.config.bags
}

/// The whole trip, bags included, does not exceed the price cap.
pub fn trip_within_price(candidate: &TripCandidate<'_, '_>, query: &TripQuery<'_>) -> bool {
    query
        .config
        .max_price
        .is_none_or(|max| candidate.total_price(query.config.bags) <= max)
}

/// The way back takes off after the outbound leg has landed.
pub fn returns_after_arrival(candidate: &TripCandidate<'_, '_>, _query: &TripQuery<'_>) -> bool {
    candidate
        .inbound
        .is_none_or(|c| c.first().departure() > candidate.outbound.last().arrival())
}
