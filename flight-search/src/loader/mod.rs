//! Flight table loading.
//!
//! Reads the CSV flight table into validated [`Flight`]s. The header must
//! name the columns `flight_no`, `origin`, `destination`, `departure`,
//! `arrival`, `base_price`, `bag_price` and `bags_allowed`; an `airline`
//! column is optional. Column order does not matter.
//!
//! # Example
//!
//! ```
//! use flight_search::loader::read_flights;
//!
//! let table = "\
//! flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed
//! ZH214,WIW,RFZ,2021-09-01T23:20:00,2021-09-02T03:50:00,168.0,12,2
//! ";
//! let flights = read_flights(table.as_bytes()).unwrap();
//! assert_eq!(flights.len(), 1);
//! assert_eq!(flights[0].origin().as_str(), "WIW");
//! ```

mod error;

pub use error::LoadError;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{AirportCode, Flight, FlightDetails, Price};

/// Timestamp format used by the departure and arrival columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One row of the flight table as it appears on disk.
#[derive(Debug, Deserialize)]
struct FlightRecord {
    flight_no: String,
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    base_price: String,
    bag_price: String,
    bags_allowed: String,
    #[serde(default)]
    airline: Option<String>,
}

impl FlightRecord {
    fn into_flight(self, row: usize) -> Result<Flight, LoadError> {
        let airport = |field, value: &str| {
            AirportCode::parse(value).map_err(|source| LoadError::Airport { row, field, source })
        };
        let timestamp = |field, value: &str| {
            NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
                LoadError::Timestamp {
                    row,
                    field,
                    value: value.to_string(),
                }
            })
        };
        let price = |field, value: &str| {
            Price::parse(value).map_err(|source| LoadError::Price { row, field, source })
        };

        let bags_allowed = self
            .bags_allowed
            .trim()
            .parse::<u32>()
            .map_err(|_| LoadError::Bags {
                row,
                value: self.bags_allowed.clone(),
            })?;

        let details = FlightDetails {
            origin: airport("origin", &self.origin)?,
            destination: airport("destination", &self.destination)?,
            departure: timestamp("departure", &self.departure)?,
            arrival: timestamp("arrival", &self.arrival)?,
            base_price: price("base_price", &self.base_price)?,
            bag_price: price("bag_price", &self.bag_price)?,
            bags_allowed,
            airline: self.airline.filter(|a| !a.is_empty()),
            flight_no: self.flight_no,
        };

        Flight::new(details).map_err(|source| LoadError::Flight { row, source })
    }
}

/// Read flights from CSV data, in table order.
///
/// Stops at the first bad row.
pub fn read_flights<R: Read>(reader: R) -> Result<Vec<Flight>, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut flights = Vec::new();
    for (index, record) in csv.deserialize::<FlightRecord>().enumerate() {
        let row = index + 1;
        let flight = record?.into_flight(row)?;
        flights.push(flight);
    }

    debug!(flights = flights.len(), "flight table parsed");

    Ok(flights)
}

/// Load flights from a CSV file.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<Flight>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let flights = read_flights(file)?;

    info!(path = %path.display(), flights = flights.len(), "loaded flight table");

    Ok(flights)
}
