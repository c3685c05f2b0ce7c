//! Flight table loading errors.

use crate::domain::{DomainError, InvalidAirportCode, InvalidPrice};

/// Errors from reading a flight table.
///
/// Row numbers count data rows from 1; the header is not a row.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("cannot read flight table: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV or a missing/unexpected column
    #[error("malformed flight table: {0}")]
    Csv(#[from] csv::Error),

    /// A departure or arrival that isn't `YYYY-MM-DDTHH:MM:SS`
    #[error("row {row}: invalid {field} timestamp {value:?}")]
    Timestamp {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: {field}: {source}")]
    Price {
        row: usize,
        field: &'static str,
        #[source]
        source: InvalidPrice,
    },

    /// Bag allowance that isn't a non-negative integer
    #[error("row {row}: invalid bags_allowed {value:?}")]
    Bags { row: usize, value: String },

    #[error("row {row}: {field}: {source}")]
    Airport {
        row: usize,
        field: &'static str,
        #[source]
        source: InvalidAirportCode,
    },

    /// The row parsed but describes an impossible flight
    #[error("row {row}: {source}")]
    Flight {
        row: usize,
        #[source]
        source: DomainError,
    },
}
