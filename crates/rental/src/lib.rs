//! Rental domain module.
//!
//! This crate contains the business rules for a car rental fleet, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod agency;
pub mod car;
pub mod stats;

pub use agency::{Agency, DEFAULT_AGENCY_NAME};
pub use car::Car;
pub use stats::FleetStats;
