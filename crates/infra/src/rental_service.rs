//! Rental service: the fleet aggregate plus write-through persistence.
//!
//! Every successful mutation is followed by a full snapshot save before the
//! call returns. A failed save is logged but does not undo the in-memory
//! mutation, so the file is eventually (not transactionally) consistent with
//! memory.

use thiserror::Error;

use fleet_core::{DomainError, Registration};
use fleet_rental::{Agency, Car, FleetStats};

use crate::fleet_store::{FleetStore, JsonFleetStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Never produced by the mutation methods, which log and swallow save
    /// failures. Callers of `load_from_store`/`save_to_store` convert into it.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Domain(e) if e.is_not_found())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Orchestrates one `Agency` and the store it is persisted to.
///
/// Not internally synchronized: mutations take `&mut self`, so concurrent
/// callers must share it behind a lock.
#[derive(Debug)]
pub struct RentalService<S = JsonFleetStore> {
    agency: Agency,
    store: S,
}

impl<S: FleetStore> RentalService<S> {
    pub fn new(agency: Agency, store: S) -> Self {
        Self { agency, store }
    }

    pub fn agency(&self) -> &Agency {
        &self.agency
    }

    pub fn agency_name(&self) -> &str {
        self.agency.name()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the fleet with the stored snapshot. Returns the number of cars loaded.
    pub fn load_from_store(&mut self) -> Result<usize, StoreError> {
        let cars = self.store.load()?;
        self.agency
            .replace_cars(cars)
            .map_err(|e| StoreError::Invalid(e.to_string()))?;

        tracing::info!(
            store = %self.store.describe(),
            cars = self.agency.len(),
            "fleet loaded"
        );
        Ok(self.agency.len())
    }

    pub fn save_to_store(&self) -> Result<(), StoreError> {
        self.store.save(self.agency.cars())
    }

    fn persist(&self) {
        if let Err(e) = self.save_to_store() {
            tracing::warn!(
                store = %self.store.describe(),
                error = %e,
                "fleet save failed; in-memory state kept"
            );
        }
    }

    pub fn all_cars(&self) -> &[Car] {
        self.agency.cars()
    }

    pub fn available_cars(&self) -> Vec<&Car> {
        self.agency.available_cars().collect()
    }

    pub fn find_car(&self, registration: &str) -> ServiceResult<&Car> {
        let registration = Registration::lookup(registration);
        self.agency
            .find(&registration)
            .ok_or_else(|| DomainError::NotFound(registration).into())
    }

    pub fn add_car(
        &mut self,
        brand: &str,
        model: &str,
        year: i32,
        registration: &str,
    ) -> ServiceResult<Car> {
        let registration = Registration::new(registration)?;
        let car = Car::new(brand, model, year, registration);

        if let Err(e) = self.agency.add_car(car.clone()) {
            tracing::debug!(error = %e, "add rejected");
            return Err(e.into());
        }
        tracing::info!(
            registration = %car.registration(),
            brand = car.brand(),
            model = car.model(),
            "car added"
        );

        self.persist();
        Ok(car)
    }

    pub fn rent_car(&mut self, registration: &str) -> ServiceResult<Car> {
        let registration = Registration::lookup(registration);
        let car = match self.agency.rent_car(&registration) {
            Ok(car) => car.clone(),
            Err(e) => {
                tracing::debug!(error = %e, "rent rejected");
                return Err(e.into());
            }
        };
        tracing::info!(registration = %registration, "car rented");

        self.persist();
        Ok(car)
    }

    pub fn return_car(&mut self, registration: &str) -> ServiceResult<Car> {
        let registration = Registration::lookup(registration);
        let car = match self.agency.return_car(&registration) {
            Ok(car) => car.clone(),
            Err(e) => {
                tracing::debug!(error = %e, "return rejected");
                return Err(e.into());
            }
        };
        tracing::info!(registration = %registration, "car returned");

        self.persist();
        Ok(car)
    }

    pub fn delete_car(&mut self, registration: &str) -> ServiceResult<Car> {
        let registration = Registration::lookup(registration);
        let car = self.agency.remove_car(&registration)?;
        tracing::info!(registration = %registration, status = car.status_label(), "car deleted");

        self.persist();
        Ok(car)
    }

    pub fn fleet_stats(&self) -> FleetStats {
        self.agency.stats()
    }
}

impl RentalService<JsonFleetStore> {
    /// Service over a JSON file at `path`; the fleet starts empty until loaded.
    pub fn with_json_file(agency: Agency, path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(agency, JsonFleetStore::new(path))
    }
}
