//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Registration number of a car: the fleet-wide identity of a vehicle.
///
/// Always stored uppercase, so lookups can compare case-sensitively. Whitespace
/// is kept as given: `" ab c "` and `"AB C"` are different registrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Registration(String);

impl Registration {
    /// Normalize and validate a registration for a new car.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(DomainError::invalid_input("registration cannot be empty"));
        }
        Ok(Self(raw.to_uppercase()))
    }

    /// Normalize a registration used only to look a car up.
    ///
    /// Not validated: a blank key simply matches no car, so callers report
    /// `NotFound` rather than a validation error.
    pub fn lookup(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Registration {}

impl core::fmt::Display for Registration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Registration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Registration {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Deserialization goes through `new` so stored lowercase values are normalized.
impl<'de> Deserialize<'de> for Registration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_uppercased() {
        let reg = Registration::new("abc123").unwrap();
        assert_eq!(reg.as_str(), "ABC123");
        assert_eq!(reg, "ABC123".parse().unwrap());
    }

    #[test]
    fn inner_and_surrounding_whitespace_is_kept() {
        assert_eq!(Registration::new(" ab c ").unwrap().as_str(), " AB C ");
        assert_ne!(Registration::lookup(" ab c "), Registration::new("AB C").unwrap());
    }

    #[test]
    fn lookup_key_accepts_blank_input() {
        assert_eq!(Registration::lookup("").as_str(), "");
        assert_eq!(Registration::lookup("xy1").as_str(), "XY1");
    }

    #[test]
    fn blank_registration_is_rejected() {
        let err = Registration::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
