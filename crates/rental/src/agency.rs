use fleet_core::{DomainError, DomainResult, Entity, Registration};

use crate::car::Car;
use crate::stats::FleetStats;

pub const DEFAULT_AGENCY_NAME: &str = "Orange Car Rental";

/// A rental agency and the fleet it owns.
///
/// Cars are kept in insertion order, which is also the display order. Lookups
/// are linear scans by registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agency {
    name: String,
    cars: Vec<Car>,
}

impl Default for Agency {
    fn default() -> Self {
        Self::new(DEFAULT_AGENCY_NAME)
    }
}

impl Agency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cars: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn available_cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|c| c.is_available())
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn find(&self, registration: &Registration) -> Option<&Car> {
        self.cars.iter().find(|c| c.has_id(registration))
    }

    fn position(&self, registration: &Registration) -> Option<usize> {
        self.cars.iter().position(|c| c.has_id(registration))
    }

    fn find_mut(&mut self, registration: &Registration) -> DomainResult<&mut Car> {
        self.cars
            .iter_mut()
            .find(|c| c.has_id(registration))
            .ok_or_else(|| DomainError::NotFound(registration.clone()))
    }

    /// Append a car; fails without touching the fleet if the registration is taken.
    pub fn add_car(&mut self, car: Car) -> DomainResult<()> {
        if self.find(car.registration()).is_some() {
            return Err(DomainError::DuplicateRegistration(car.registration().clone()));
        }
        self.cars.push(car);
        Ok(())
    }

    pub fn rent_car(&mut self, registration: &Registration) -> DomainResult<&Car> {
        let car = self.find_mut(registration)?;
        car.rent()?;
        Ok(&*car)
    }

    pub fn return_car(&mut self, registration: &Registration) -> DomainResult<&Car> {
        let car = self.find_mut(registration)?;
        car.return_to_fleet()?;
        Ok(&*car)
    }

    /// Remove a car in either state, returning it.
    pub fn remove_car(&mut self, registration: &Registration) -> DomainResult<Car> {
        let idx = self
            .position(registration)
            .ok_or_else(|| DomainError::NotFound(registration.clone()))?;
        Ok(self.cars.remove(idx))
    }

    /// Replace the whole fleet (full reload, not a merge).
    ///
    /// The incoming set is validated first; on a duplicate registration the
    /// current fleet is left untouched.
    pub fn replace_cars(&mut self, cars: Vec<Car>) -> DomainResult<()> {
        let mut staged = Agency::new(self.name.clone());
        for car in cars {
            staged.add_car(car)?;
        }
        self.cars = staged.cars;
        Ok(())
    }

    pub fn stats(&self) -> FleetStats {
        FleetStats::from_counts(self.cars.len(), self.available_cars().count())
    }
}
