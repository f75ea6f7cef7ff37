use serde::{Deserialize, Serialize};

use fleet_core::{DomainError, DomainResult, Entity, Registration};

fn default_available() -> bool {
    true
}

/// A car in the rental fleet.
///
/// Serialized with the on-disk / on-the-wire field names; availability is
/// stored as `availability` and defaults to `true` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    brand: String,
    model: String,
    year: i32,
    registration: Registration,
    #[serde(rename = "availability", default = "default_available")]
    available: bool,
}

impl Car {
    /// New cars enter the fleet available.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        registration: Registration,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            registration,
            available: true,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status_label(&self) -> &'static str {
        if self.available { "Available" } else { "Rented" }
    }

    /// Available -> Rented.
    pub fn rent(&mut self) -> DomainResult<()> {
        if !self.available {
            return Err(DomainError::AlreadyRented(self.registration.clone()));
        }
        self.available = false;
        Ok(())
    }

    /// Rented -> Available.
    pub fn return_to_fleet(&mut self) -> DomainResult<()> {
        if self.available {
            return Err(DomainError::AlreadyAvailable(self.registration.clone()));
        }
        self.available = true;
        Ok(())
    }
}

impl Entity for Car {
    type Id = Registration;

    fn id(&self) -> &Self::Id {
        &self.registration
    }
}

impl core::fmt::Display for Car {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - {} {} ({}) - [{}]",
            self.registration,
            self.brand,
            self.model,
            self.year,
            self.status_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Car {
        Car::new("Toyota", "Corolla", 2022, Registration::new("abc123").unwrap())
    }

    #[test]
    fn new_car_is_available() {
        let car = corolla();
        assert!(car.is_available());
        assert_eq!(car.registration().as_str(), "ABC123");
        assert_eq!(car.status_label(), "Available");
    }

    #[test]
    fn rent_then_return_round_trips_availability() {
        let mut car = corolla();
        car.rent().unwrap();
        assert!(!car.is_available());
        assert_eq!(car.status_label(), "Rented");

        car.return_to_fleet().unwrap();
        assert!(car.is_available());
    }

    #[test]
    fn rent_twice_is_rejected() {
        let mut car = corolla();
        car.rent().unwrap();
        let err = car.rent().unwrap_err();
        assert_eq!(err, DomainError::AlreadyRented(car.registration().clone()));
        assert!(!car.is_available());
    }

    #[test]
    fn return_of_available_car_is_rejected() {
        let mut car = corolla();
        let err = car.return_to_fleet().unwrap_err();
        assert!(matches!(err, DomainError::AlreadyAvailable(_)));
    }

    #[test]
    fn serializes_with_availability_field() {
        let json = serde_json::to_value(corolla()).unwrap();
        assert_eq!(json["availability"], true);
        assert_eq!(json["registration"], "ABC123");
        assert_eq!(json["year"], 2022);
    }

    #[test]
    fn missing_availability_defaults_to_true_and_registration_is_normalized() {
        let car: Car = serde_json::from_str(
            r#"{"brand":"Ford","model":"Focus","year":2019,"registration":"xyz789"}"#,
        )
        .unwrap();
        assert!(car.is_available());
        assert_eq!(car.registration().as_str(), "XYZ789");
    }

    #[test]
    fn display_matches_fleet_listing_format() {
        assert_eq!(corolla().to_string(), "ABC123 - Toyota Corolla (2022) - [Available]");
    }
}
