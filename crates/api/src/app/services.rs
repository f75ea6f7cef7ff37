use std::sync::{Mutex, MutexGuard, PoisonError};

use fleet_infra::{JsonFleetStore, RentalService};
use fleet_rental::Agency;

use crate::config::AppConfig;

/// Shared application state.
///
/// `RentalService` is not internally synchronized; every handler goes through
/// the one mutex here, which serializes mutations and their file writes.
#[derive(Debug)]
pub struct AppServices {
    rental: Mutex<RentalService<JsonFleetStore>>,
}

impl AppServices {
    pub fn new(rental: RentalService<JsonFleetStore>) -> Self {
        Self {
            rental: Mutex::new(rental),
        }
    }

    /// Lock the rental service.
    ///
    /// A panic while holding the lock cannot leave the fleet half-mutated (each
    /// mutation is a single field flip or vec edit), so poisoning is ignored.
    pub fn rental(&self) -> MutexGuard<'_, RentalService<JsonFleetStore>> {
        self.rental.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn build_services(config: &AppConfig) -> AppServices {
    let agency = Agency::new(config.agency_name.clone());
    let mut rental = RentalService::with_json_file(agency, &config.data_file);

    if let Err(e) = rental.load_from_store() {
        tracing::warn!(error = %e, "failed to load fleet; starting with an empty fleet");
    }

    AppServices::new(rental)
}
