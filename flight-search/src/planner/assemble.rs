//! Trip assembly.
//!
//! Turns the combinations found by the path search into trips: one-way
//! trips straight from outbound combinations, round trips from every
//! (outbound, return) pair. Candidates failing any trip rule are dropped.

use tracing::{debug, trace};

use crate::domain::{Combination, Trip, TripCandidate};

use super::rules::{Rules, TripQuery};

/// Trips built by [`assemble_trips`].
#[derive(Debug, Clone)]
pub struct AssembledTrips {
    /// Eligible trips, in discovery order.
    pub trips: Vec<Trip>,

    /// Candidates discarded by trip rules.
    pub rejected: usize,
}

/// Build eligible trips, in discovery order.
///
/// For round trips the outbound combination is the outer loop, so all
/// returns paired with the first outbound come before those paired with
/// the second.
pub fn assemble_trips(
    outbound: &[Combination<'_>],
    inbound: Option<&[Combination<'_>]>,
    query: &TripQuery<'_>,
    rules: &Rules,
) -> AssembledTrips {
    let bags = query.config.bags;
    let mut trips = Vec::new();
    let mut rejected = 0;

    let mut consider = |candidate: TripCandidate<'_, '_>| match rules.reject_trip(&candidate, query) {
        Some(rule) => {
            trace!(
                legs = candidate.legs().count(),
                rule,
                "trip rejected"
            );
            rejected += 1;
        }
        None => trips.push(Trip::from_candidate(&candidate, bags)),
    };

    match inbound {
        None => {
            for combination in outbound {
                consider(TripCandidate::one_way(combination));
            }
        }
        Some(inbound) => {
            for out in outbound {
                for back in inbound {
                    consider(TripCandidate::round_trip(out, back));
                }
            }
        }
    }

    debug!(trips = trips.len(), rejected, "trip assembly complete");

    AssembledTrips { trips, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, Flight, FlightDetails, Price};
    use crate::planner::SearchConfig;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn flight(no: &str, route: (&str, &str), day: u32, dep: u32, price: u64, bags: u32) -> Flight {
        Flight::new(FlightDetails {
            flight_no: no.into(),
            origin: code(route.0),
            destination: code(route.1),
            departure: at(day, dep),
            arrival: at(day, dep + 2),
            base_price: Price::from_units(price),
            bag_price: Price::from_units(5),
            bags_allowed: bags,
            airline: None,
        })
        .unwrap()
    }

    fn single(flight: &Flight) -> Combination<'_> {
        Combination::new(vec![flight]).unwrap()
    }

    #[test]
    fn one_way_keeps_eligible_in_order() {
        let a = flight("A1", ("AAA", "BBB"), 1, 8, 300, 2);
        let b = flight("A2", ("AAA", "BBB"), 1, 12, 100, 0);
        let c = flight("A3", ("AAA", "BBB"), 1, 16, 200, 1);
        let outbound = vec![single(&a), single(&b), single(&c)];
        let config = SearchConfig {
            bags: 1,
            ..SearchConfig::default()
        };
        let query = TripQuery {
            origin: code("AAA"),
            destination: code("BBB"),
            config: &config,
        };

        let assembled = assemble_trips(&outbound, None, &query, &Rules::default());
        assert_eq!(assembled.rejected, 1);
        let trips = assembled.trips;

        let numbers: Vec<&str> = trips.iter().map(|t| t.flights()[0].flight_no()).collect();
        assert_eq!(numbers, vec!["A1", "A3"]);
        assert_eq!(trips[0].total_price(), Price::from_units(305));
    }

    #[test]
    fn round_trip_pairs_every_outbound_with_every_return() {
        let out1 = flight("O1", ("AAA", "BBB"), 1, 8, 100, 1);
        let out2 = flight("O2", ("AAA", "BBB"), 2, 8, 100, 1);
        let back1 = flight("R1", ("BBB", "AAA"), 3, 8, 50, 1);
        let back2 = flight("R2", ("BBB", "AAA"), 4, 8, 60, 1);
        let outbound = vec![single(&out1), single(&out2)];
        let inbound = vec![single(&back1), single(&back2)];
        let config = SearchConfig {
            round_trip: true,
            ..SearchConfig::default()
        };
        let query = TripQuery {
            origin: code("AAA"),
            destination: code("BBB"),
            config: &config,
        };

        let trips =
            assemble_trips(&outbound, Some(inbound.as_slice()), &query, &Rules::default()).trips;

        let pairs: Vec<(&str, &str)> = trips
            .iter()
            .map(|t| (t.flights()[0].flight_no(), t.flights()[1].flight_no()))
            .collect();
        assert_eq!(pairs, vec![("O1", "R1"), ("O1", "R2"), ("O2", "R1"), ("O2", "R2")]);
        for trip in &trips {
            assert_eq!(trip.origin(), code("AAA"));
            assert_eq!(trip.destination(), code("AAA"));
        }
    }

    #[test]
    fn round_trip_drops_returns_before_arrival() {
        let out = flight("O1", ("AAA", "BBB"), 2, 8, 100, 1);
        let early = flight("R1", ("BBB", "AAA"), 1, 8, 50, 1);
        let late = flight("R2", ("BBB", "AAA"), 3, 8, 50, 1);
        let outbound = vec![single(&out)];
        let inbound = vec![single(&early), single(&late)];
        let config = SearchConfig {
            round_trip: true,
            ..SearchConfig::default()
        };
        let query = TripQuery {
            origin: code("AAA"),
            destination: code("BBB"),
            config: &config,
        };

        let assembled =
            assemble_trips(&outbound, Some(inbound.as_slice()), &query, &Rules::default());

        assert_eq!(assembled.rejected, 1);
        assert_eq!(assembled.trips.len(), 1);
        assert_eq!(assembled.trips[0].flights()[1].flight_no(), "R2");
    }

    #[test]
    fn round_trip_price_cap_covers_both_directions() {
        let out = flight("O1", ("AAA", "BBB"), 1, 8, 100, 1);
        let back = flight("R1", ("BBB", "AAA"), 2, 8, 100, 1);
        let outbound = vec![single(&out)];
        let inbound = vec![single(&back)];
        let config = SearchConfig {
            round_trip: true,
            max_price: Some(Price::from_units(150)),
            ..SearchConfig::default()
        };
        let query = TripQuery {
            origin: code("AAA"),
            destination: code("BBB"),
            config: &config,
        };

        let trips =
            assemble_trips(&outbound, Some(inbound.as_slice()), &query, &Rules::default()).trips;
        assert!(trips.is_empty());
    }

    #[test]
    fn empty_return_side_yields_nothing() {
        let out = flight("O1", ("AAA", "BBB"), 1, 8, 100, 1);
        let outbound = vec![single(&out)];
        let config = SearchConfig {
            round_trip: true,
            ..SearchConfig::default()
        };
        let query = TripQuery {
            origin: code("AAA"),
            destination: code("BBB"),
            config: &config,
        };

        let trips = assemble_trips(&outbound, Some(&[][..]), &query, &Rules::default()).trips;
        assert!(trips.is_empty());
    }
}
