//! Trip types.
//!
//! A `TripCandidate` pairs an outbound combination with an optional return
//! combination while trip-level rules decide whether to keep it. A `Trip`
//! is the owned, price-annotated result that survives those rules.

use chrono::Duration;

use super::{AirportCode, Combination, Flight, Price};

/// An outbound combination and, for round trips, the way back.
#[derive(Debug, Clone, Copy)]
pub struct TripCandidate<'a, 'g> {
    pub outbound: &'a Combination<'g>,
    pub inbound: Option<&'a Combination<'g>>,
}

impl<'a, 'g> TripCandidate<'a, 'g> {
    /// A one-way candidate.
    pub fn one_way(outbound: &'a Combination<'g>) -> Self {
        Self {
            outbound,
            inbound: None,
        }
    }

    /// A round-trip candidate.
    pub fn round_trip(outbound: &'a Combination<'g>, inbound: &'a Combination<'g>) -> Self {
        Self {
            outbound,
            inbound: Some(inbound),
        }
    }

    /// Returns every flight, outbound first.
    pub fn legs(self) -> impl Iterator<Item = &'g Flight> + 'a {
        self.outbound
            .flights()
            .iter()
            .chain(self.inbound.into_iter().flat_map(|c| c.flights()))
            .copied()
    }

    /// Returns the summed price of every leg when travelling with `bags` bags.
    pub fn total_price(&self, bags: u32) -> Price {
        self.legs().map(|f| f.total_price(bags)).sum()
    }

    /// Returns the most restrictive bag allowance across every leg.
    pub fn bags_allowed(&self) -> u32 {
        self.legs().map(|f| f.bags_allowed()).min().unwrap_or(0)
    }

    /// Returns the time spent travelling, excluding the stay between
    /// outbound and return.
    pub fn travel_time(&self) -> Duration {
        self.outbound.travel_time()
            + self
                .inbound
                .map(|c| c.travel_time())
                .unwrap_or_else(Duration::zero)
    }
}

/// A complete, eligible trip ready for ranking and output.
///
/// # Invariants
///
/// - At least one flight
/// - `total_price` is the sum over all flights of base price plus
///   `bags_count` times bag price
/// - `bags_allowed` is the minimum allowance over all flights
/// - For round trips, `destination == origin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    origin: AirportCode,
    destination: AirportCode,
    bags_allowed: u32,
    bags_count: u32,
    total_price: Price,
    travel_time: Duration,
    connections: usize,
    is_round_trip: bool,
    flights: Vec<Flight>,
}

impl Trip {
    /// Builds the owned trip from a candidate priced for `bags` bags.
    ///
    /// The reported destination of a round trip is where it ends (back at
    /// the origin), not the turnaround airport.
    pub fn from_candidate(candidate: &TripCandidate<'_, '_>, bags: u32) -> Self {
        let flights: Vec<Flight> = candidate.legs().cloned().collect();
        let outbound = candidate.outbound;
        let destination = candidate
            .inbound
            .map_or_else(|| outbound.destination(), |c| c.destination());

        Trip {
            origin: outbound.origin(),
            destination,
            bags_allowed: candidate.bags_allowed(),
            bags_count: bags,
            total_price: candidate.total_price(bags),
            travel_time: candidate.travel_time(),
            connections: flights.len().saturating_sub(1),
            is_round_trip: candidate.inbound.is_some(),
            flights,
        }
    }

    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    /// Returns where the trip ends (the origin again for round trips).
    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    /// Returns the most restrictive bag allowance across every leg.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the number of bags the price was computed for.
    pub fn bags_count(&self) -> u32 {
        self.bags_count
    }

    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// Returns the time spent travelling (layovers included, stay excluded).
    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }

    /// Returns the number of connections (legs - 1).
    pub fn connections(&self) -> usize {
        self.connections
    }

    pub fn is_round_trip(&self) -> bool {
        self.is_round_trip
    }

    /// Returns all flights, outbound legs followed by return legs.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightDetails;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 9, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn flight(origin: &str, destination: &str, day: u32, dep: u32, arr: u32, bags: u32) -> Flight {
        Flight::new(FlightDetails {
            flight_no: format!("{origin}{destination}"),
            origin: AirportCode::parse(origin).unwrap(),
            destination: AirportCode::parse(destination).unwrap(),
            departure: at(day, dep),
            arrival: at(day, arr),
            base_price: Price::from_units(100),
            bag_price: Price::from_units(20),
            bags_allowed: bags,
            airline: None,
        })
        .unwrap()
    }

    #[test]
    fn one_way_trip() {
        let ab = flight("AAA", "BBB", 1, 10, 12, 2);
        let bc = flight("BBB", "CCC", 1, 14, 16, 1);
        let outbound = Combination::new(vec![&ab, &bc]).unwrap();

        let trip = Trip::from_candidate(&TripCandidate::one_way(&outbound), 1);

        assert_eq!(trip.origin().as_str(), "AAA");
        assert_eq!(trip.destination().as_str(), "CCC");
        assert_eq!(trip.bags_allowed(), 1);
        assert_eq!(trip.bags_count(), 1);
        assert_eq!(trip.total_price(), Price::from_units(240));
        assert_eq!(trip.travel_time(), Duration::hours(6));
        assert_eq!(trip.connections(), 1);
        assert!(!trip.is_round_trip());
        assert_eq!(trip.flights(), &[ab.clone(), bc.clone()]);
    }

    #[test]
    fn round_trip_reports_origin_as_destination() {
        let ab = flight("AAA", "BBB", 1, 10, 12, 2);
        let ba = flight("BBB", "AAA", 5, 8, 11, 3);
        let outbound = Combination::new(vec![&ab]).unwrap();
        let inbound = Combination::new(vec![&ba]).unwrap();

        let trip = Trip::from_candidate(&TripCandidate::round_trip(&outbound, &inbound), 0);

        assert_eq!(trip.origin().as_str(), "AAA");
        assert_eq!(trip.destination().as_str(), "AAA");
        assert_eq!(trip.connections(), 1);
        assert_eq!(trip.bags_allowed(), 2);
        assert_eq!(trip.total_price(), Price::from_units(200));
        // Days spent at BBB don't count as travel.
        assert_eq!(trip.travel_time(), Duration::hours(5));
        assert!(trip.is_round_trip());
        assert_eq!(trip.flights()[1], ba);
    }
}
