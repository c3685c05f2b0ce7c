//! Flight itinerary search.
//!
//! Loads a table of scheduled flights and answers: "which trips take me
//! from this airport to that one, with my bags, under my limits, and what
//! do they cost?" Trips are found by exhaustive depth-first search over
//! the flight graph and returned cheapest first.

pub mod domain;
pub mod loader;
pub mod planner;
pub mod report;
