//! Trip ranking for search results.

use crate::domain::Trip;

/// Rank trips by total price, cheapest first.
///
/// The sort is stable: trips with the same price keep the order the
/// assembler produced them in, which follows the order of the flight table.
pub fn rank_trips(mut trips: Vec<Trip>) -> Vec<Trip> {
    trips.sort_by_key(|trip| trip.total_price());
    trips
}
