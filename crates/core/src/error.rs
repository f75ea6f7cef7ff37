//! Domain error model.

use thiserror::Error;

use crate::id::Registration;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, state transitions). Storage failures belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A car with this registration is already part of the fleet.
    #[error("Car with registration {0} already exists")]
    DuplicateRegistration(Registration),

    /// No car with this registration exists in the fleet.
    #[error("Car with registration {0} not found")]
    NotFound(Registration),

    /// Rent requested for a car that is already out.
    #[error("Car {0} is already rented")]
    AlreadyRented(Registration),

    /// Return requested for a car that is already in the lot.
    #[error("Car {0} is already available")]
    AlreadyAvailable(Registration),

    /// Malformed input (missing fields, non-integer year, blank registration).
    #[error("{0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the error means "no such car" (as opposed to a rejected request).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
