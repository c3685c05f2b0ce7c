//! Domain types for the flight search.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod combination;
mod error;
mod flight;
mod price;
mod trip;

pub use airport::{AirportCode, InvalidAirportCode};
pub use combination::Combination;
pub use error::DomainError;
pub use flight::{Flight, FlightDetails};
pub use price::{InvalidPrice, Price};
pub use trip::{Trip, TripCandidate};
