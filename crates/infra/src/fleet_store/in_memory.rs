use std::sync::RwLock;

use fleet_rental::Car;

use super::r#trait::{FleetStore, StoreError};

/// In-memory fleet store for tests/dev.
///
/// Starts out "missing" (load fails with `FileNotFound`) until the first save.
#[derive(Debug, Default)]
pub struct InMemoryFleetStore {
    inner: RwLock<Option<Vec<Car>>>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            inner: RwLock::new(Some(cars)),
        }
    }

    /// Last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<Vec<Car>> {
        self.inner.read().ok().and_then(|s| s.clone())
    }
}

impl FleetStore for InMemoryFleetStore {
    fn load(&self) -> Result<Vec<Car>, StoreError> {
        self.snapshot()
            .ok_or_else(|| StoreError::FileNotFound("<memory>".into()))
    }

    fn save(&self, cars: &[Car]) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::Io(std::io::Error::other("store lock poisoned")))?;
        *guard = Some(cars.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
