//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from loading/IO errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A flight departs from and arrives at the same airport
    #[error("flight {flight_no} departs from and arrives at {airport}")]
    SameAirport {
        flight_no: String,
        airport: AirportCode,
    },

    /// A flight lands before (or when) it takes off
    #[error("flight {0} does not arrive after it departs")]
    ArrivalNotAfterDeparture(String),

    /// Combination has no flights
    #[error("combination must have at least one flight")]
    EmptyCombination,

    /// Consecutive flights don't share an airport
    #[error("flight into {0} does not connect with flight out of {1}")]
    Disconnected(AirportCode, AirportCode),

    /// A combination passes through the same airport twice
    #[error("combination visits {0} more than once")]
    RepeatedAirport(AirportCode),
}
