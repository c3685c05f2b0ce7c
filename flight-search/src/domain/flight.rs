//! Scheduled flight type.

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError, Price};

/// Unvalidated flight fields, as handed over by an input adapter.
///
/// Turned into a [`Flight`] with [`Flight::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightDetails {
    pub flight_no: String,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub base_price: Price,
    pub bag_price: Price,
    pub bags_allowed: u32,
    pub airline: Option<String>,
}

/// A single scheduled flight (one edge of the flight graph).
///
/// # Invariants
///
/// - `origin != destination`
/// - `departure < arrival`
/// - prices and bag allowance are non-negative (by type)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    details: FlightDetails,
}

impl Flight {
    /// Validate flight details.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the flight is a self-loop or does not arrive after
    /// it departs.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_search::domain::{AirportCode, Flight, FlightDetails, Price};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap();
    /// let flight = Flight::new(FlightDetails {
    ///     flight_no: "ZH214".into(),
    ///     origin: AirportCode::parse("WIW").unwrap(),
    ///     destination: AirportCode::parse("RFZ").unwrap(),
    ///     departure: day.and_hms_opt(23, 20, 0).unwrap(),
    ///     arrival: day.and_hms_opt(23, 59, 0).unwrap(),
    ///     base_price: Price::from_units(168),
    ///     bag_price: Price::from_units(12),
    ///     bags_allowed: 2,
    ///     airline: None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(flight.total_price(1), Price::from_units(180));
    /// ```
    pub fn new(details: FlightDetails) -> Result<Self, DomainError> {
        if details.origin == details.destination {
            return Err(DomainError::SameAirport {
                flight_no: details.flight_no,
                airport: details.origin,
            });
        }

        if details.arrival <= details.departure {
            return Err(DomainError::ArrivalNotAfterDeparture(details.flight_no));
        }

        Ok(Flight { details })
    }

    /// Returns the flight number.
    pub fn flight_no(&self) -> &str {
        &self.details.flight_no
    }

    /// Returns the departure airport.
    pub fn origin(&self) -> AirportCode {
        self.details.origin
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> AirportCode {
        self.details.destination
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.details.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.details.arrival
    }

    pub fn base_price(&self) -> Price {
        self.details.base_price
    }

    /// Returns the price charged per checked bag.
    pub fn bag_price(&self) -> Price {
        self.details.bag_price
    }

    /// Returns the maximum number of bags this flight accepts.
    pub fn bags_allowed(&self) -> u32 {
        self.details.bags_allowed
    }

    pub fn airline(&self) -> Option<&str> {
        self.details.airline.as_deref()
    }

    /// Returns the price of this flight when travelling with `bags` bags.
    pub fn total_price(&self, bags: u32) -> Price {
        self.details.base_price + self.details.bag_price * bags
    }

    /// Returns the time spent in the air.
    pub fn duration(&self) -> Duration {
        self.details.arrival - self.details.departure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn details(origin: &str, destination: &str, dep: (u32, u32), arr: (u32, u32)) -> FlightDetails {
        let day = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap();
        FlightDetails {
            flight_no: "PV404".into(),
            origin: AirportCode::parse(origin).unwrap(),
            destination: AirportCode::parse(destination).unwrap(),
            departure: day.and_hms_opt(dep.0, dep.1, 0).unwrap(),
            arrival: day.and_hms_opt(arr.0, arr.1, 0).unwrap(),
            base_price: Price::from_units(100),
            bag_price: Price::from_units(15),
            bags_allowed: 2,
            airline: Some("Wizz".into()),
        }
    }

    #[test]
    fn valid_flight() {
        let flight = Flight::new(details("BTW", "REJ", (10, 0), (12, 30))).unwrap();

        assert_eq!(flight.flight_no(), "PV404");
        assert_eq!(flight.origin().as_str(), "BTW");
        assert_eq!(flight.destination().as_str(), "REJ");
        assert_eq!(flight.duration(), Duration::minutes(150));
        assert_eq!(flight.bags_allowed(), 2);
        assert_eq!(flight.airline(), Some("Wizz"));
    }

    #[test]
    fn total_price_adds_bag_fees() {
        let flight = Flight::new(details("BTW", "REJ", (10, 0), (12, 30))).unwrap();

        assert_eq!(flight.total_price(0), Price::from_units(100));
        assert_eq!(flight.total_price(2), Price::from_units(130));
    }

    #[test]
    fn reject_same_airport() {
        let err = Flight::new(details("BTW", "BTW", (10, 0), (12, 30))).unwrap_err();
        assert!(matches!(err, DomainError::SameAirport { .. }));
    }

    #[test]
    fn reject_arrival_before_departure() {
        let err = Flight::new(details("BTW", "REJ", (12, 0), (10, 0))).unwrap_err();
        assert_eq!(err, DomainError::ArrivalNotAfterDeparture("PV404".into()));

        assert!(Flight::new(details("BTW", "REJ", (12, 0), (12, 0))).is_err());
    }
}
