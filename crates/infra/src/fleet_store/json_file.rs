use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fleet_rental::Car;

use super::r#trait::{FleetStore, StoreError};

/// On-disk document shape: `{ "cars": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetDocument {
    #[serde(default)]
    pub cars: Vec<Car>,
}

/// Fleet store backed by a single pretty-printed JSON file.
///
/// No locking is applied around the file; callers serialize access.
#[derive(Debug, Clone)]
pub struct JsonFleetStore {
    path: PathBuf,
}

impl JsonFleetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FleetStore for JsonFleetStore {
    fn load(&self) -> Result<Vec<Car>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::FileNotFound(self.path.clone()));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let doc: FleetDocument =
            serde_json::from_str(&raw).map_err(|e| StoreError::Parse(e.to_string()))?;
        Ok(doc.cars)
    }

    fn save(&self, cars: &[Car]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let doc = FleetDocument {
            cars: cars.to_vec(),
        };
        let json = encode(&doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serialization failures on save are write failures, not malformed input.
fn encode<T: Serialize>(value: &T) -> Result<String, StoreError> {
    serde_json::to_string_pretty(value).map_err(|e| StoreError::Io(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::Registration;

    fn car(r: &str) -> Car {
        Car::new("Toyota", "Corolla", 2022, Registration::new(r).unwrap())
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFleetStore::new(dir.path().join("cars.json"));
        assert!(matches!(store.load(), Err(StoreError::FileNotFound(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFleetStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.json");
        fs::write(&path, [0xff, 0xfe, 0x7b, 0x7d]).unwrap();

        assert!(matches!(JsonFleetStore::new(&path).load(), Err(StoreError::Io(_))));
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(JsonFleetStore::new(dir.path()).load(), Err(StoreError::Io(_))));
    }

    #[test]
    fn serialization_failure_is_io_error() {
        // JSON object keys must be strings.
        let unencodable: std::collections::HashMap<(i32, i32), i32> = [((1, 2), 3)].into();
        let err = encode(&unencodable).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!err.to_string().contains("Invalid JSON format"));
    }

    #[test]
    fn record_missing_a_field_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.json");
        fs::write(&path, r#"{"cars":[{"brand":"Ford","year":2019,"registration":"X1"}]}"#).unwrap();

        assert!(matches!(JsonFleetStore::new(&path).load(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn save_creates_parent_dirs_and_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFleetStore::new(dir.path().join("nested/data/cars.json"));

        let mut rented = car("B2");
        rented.rent().unwrap();
        let cars = vec![car("C3"), rented, car("A1")];

        store.save(&cars).unwrap();
        assert_eq!(store.load().unwrap(), cars);
    }

    #[test]
    fn file_uses_documented_shape() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFleetStore::new(dir.path().join("cars.json"));
        store.save(&[car("abc123")]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "cars": [{
                    "brand": "Toyota",
                    "model": "Corolla",
                    "year": 2022,
                    "registration": "ABC123",
                    "availability": true
                }]
            })
        );
    }

    #[test]
    fn missing_cars_key_loads_empty_fleet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.json");
        fs::write(&path, "{}").unwrap();

        assert!(JsonFleetStore::new(&path).load().unwrap().is_empty());
    }
}
