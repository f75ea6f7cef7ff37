use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use fleet_rental::Car;

/// Fleet store operation error.
///
/// These are **infrastructure errors** (missing file, unreadable contents, IO)
/// as opposed to domain errors (duplicates, state transitions).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data file {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid JSON format: {0}")]
    Parse(String),

    /// Well-formed JSON whose records break a fleet invariant (e.g. duplicate registrations).
    #[error("Invalid fleet data: {0}")]
    Invalid(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Snapshot store for a fleet.
///
/// Implementations must preserve car order: `load` after `save` yields the same
/// cars in the same order.
pub trait FleetStore: Send + Sync {
    /// Read the full fleet snapshot.
    fn load(&self) -> Result<Vec<Car>, StoreError>;

    /// Overwrite the stored snapshot with `cars`.
    fn save(&self, cars: &[Car]) -> Result<(), StoreError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

impl<S> FleetStore for Arc<S>
where
    S: FleetStore + ?Sized,
{
    fn load(&self) -> Result<Vec<Car>, StoreError> {
        (**self).load()
    }

    fn save(&self, cars: &[Car]) -> Result<(), StoreError> {
        (**self).save(cars)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
