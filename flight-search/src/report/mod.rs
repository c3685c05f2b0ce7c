//! Search output.
//!
//! Trips are written as a pretty-printed JSON array, one object per trip,
//! cheapest first.

mod dto;

pub use dto::{FlightResult, TripResult, format_travel_time};

use crate::domain::Trip;

/// Convert ranked trips to output records, keeping their order.
pub fn trip_results(trips: &[Trip]) -> Vec<TripResult> {
    trips.iter().map(TripResult::from_trip).collect()
}

/// Render ranked trips as a pretty-printed JSON array.
pub fn render_json(trips: &[Trip]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&trip_results(trips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, Combination, Flight, FlightDetails, Price, TripCandidate};
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    fn flight(no: &str, from: &str, to: &str, day: u32, airline: Option<&str>) -> Flight {
        let date = NaiveDate::from_ymd_opt(2021, 9, day).unwrap();
        Flight::new(FlightDetails {
            flight_no: no.into(),
            origin: AirportCode::parse(from).unwrap(),
            destination: AirportCode::parse(to).unwrap(),
            departure: date.and_hms_opt(10, 0, 0).unwrap(),
            arrival: date.and_hms_opt(12, 30, 0).unwrap(),
            base_price: Price::from_cents(10_050),
            bag_price: Price::from_units(12),
            bags_allowed: 2,
            airline: airline.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn one_way_trip_record() {
        let out = flight("ZH214", "WIW", "RFZ", 1, None);
        let combination = Combination::new(vec![&out]).unwrap();
        let trip = Trip::from_candidate(&TripCandidate::one_way(&combination), 1);

        let rendered: Value = serde_json::from_str(&render_json(&[trip]).unwrap()).unwrap();

        assert_eq!(
            rendered,
            json!([{
                "flights": [{
                    "flight_no": "ZH214",
                    "origin": "WIW",
                    "destination": "RFZ",
                    "departure": "2021-09-01T10:00:00",
                    "arrival": "2021-09-01T12:30:00",
                    "base_price": 100.5,
                    "bag_price": 12.0,
                    "bags_allowed": 2,
                }],
                "bags_allowed": 2,
                "bags_count": 1,
                "destination": "RFZ",
                "origin": "WIW",
                "total_price": 112.5,
                "travel_time": "2:30:00",
                "connections": 0,
            }])
        );
    }

    #[test]
    fn round_trip_record() {
        let out = flight("ZH214", "WIW", "RFZ", 1, Some("Example Air"));
        let back = flight("ZH215", "RFZ", "WIW", 3, None);
        let outbound = Combination::new(vec![&out]).unwrap();
        let inbound = Combination::new(vec![&back]).unwrap();
        let trip = Trip::from_candidate(&TripCandidate::round_trip(&outbound, &inbound), 0);

        let record = TripResult::from_trip(&trip);

        assert_eq!(record.origin, "WIW");
        assert_eq!(record.destination, "WIW");
        assert_eq!(record.travel_time, "5:00:00");
        assert_eq!(record.flights.len(), 2);
        assert_eq!(record.flights[0].airline.as_deref(), Some("Example Air"));

        let value = serde_json::to_value(&record).unwrap();
        assert!(value["flights"][1].get("airline").is_none());
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
