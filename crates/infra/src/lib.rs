//! Infrastructure layer: fleet persistence and the rental service built on it.

pub mod fleet_store;
pub mod rental_service;

pub use fleet_store::{FleetStore, InMemoryFleetStore, JsonFleetStore, StoreError};
pub use rental_service::{RentalService, ServiceError, ServiceResult};
