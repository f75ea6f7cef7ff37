use serde::Serialize;
use serde_json::Value;

use fleet_core::DomainError;
use fleet_rental::{Car, FleetStats};

// -------------------------
// Request DTOs
// -------------------------

const REQUIRED_CAR_FIELDS: [&str; 4] = ["brand", "model", "year", "registration"];

/// Validated body of `POST /api/cars`.
///
/// Built from a raw JSON value rather than derived, so that every missing field
/// can be reported at once and `year` may arrive as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCarRequest {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub registration: String,
}

impl AddCarRequest {
    pub fn from_json(body: &Value) -> Result<Self, DomainError> {
        let missing: Vec<&str> = REQUIRED_CAR_FIELDS
            .iter()
            .copied()
            .filter(|f| body.get(f).is_none_or(Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::invalid_input(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            brand: string_field(body, "brand")?,
            model: string_field(body, "model")?,
            year: parse_year(&body["year"])?,
            registration: string_field(body, "registration")?,
        })
    }
}

fn string_field(body: &Value, field: &str) -> Result<String, DomainError> {
    body[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DomainError::invalid_input(format!("Field {field} must be a string")))
}

fn parse_year(value: &Value) -> Result<i32, DomainError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        DomainError::invalid_input(format!("Invalid year value: {shown}"))
    })
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CarListResponse<'a> {
    pub success: bool,
    pub count: usize,
    pub cars: Vec<&'a Car>,
}

impl<'a> CarListResponse<'a> {
    pub fn new(cars: Vec<&'a Car>) -> Self {
        Self {
            success: true,
            count: cars.len(),
            cars,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub car: Car,
}

impl CarResponse {
    pub fn found(car: Car) -> Self {
        Self {
            success: true,
            message: None,
            car,
        }
    }

    /// Response for a successful mutation, e.g. `"Car Toyota Corolla (ABC123) rented successfully"`.
    pub fn changed(car: Car, verb: &str) -> Self {
        Self {
            success: true,
            message: Some(format!(
                "Car {} {} ({}) {verb} successfully",
                car.brand(),
                car.model(),
                car.registration()
            )),
            car,
        }
    }

    pub fn deleted(car: Car) -> Self {
        Self {
            success: true,
            message: Some(format!("Car {} deleted successfully", car.registration())),
            car,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: FleetStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_body_is_accepted() {
        let req = AddCarRequest::from_json(&json!({
            "brand": "Toyota", "model": "Corolla", "year": 2022, "registration": "abc123"
        }))
        .unwrap();
        assert_eq!(req.year, 2022);
        assert_eq!(req.registration, "abc123");
    }

    #[test]
    fn numeric_string_year_is_accepted() {
        let req = AddCarRequest::from_json(&json!({
            "brand": "Toyota", "model": "Corolla", "year": " 2021 ", "registration": "X"
        }))
        .unwrap();
        assert_eq!(req.year, 2021);
    }

    #[test]
    fn missing_fields_are_listed_in_order() {
        let err = AddCarRequest::from_json(&json!({ "year": 2022, "model": null })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: brand, model, registration"
        );
    }

    #[test]
    fn non_integer_year_is_rejected() {
        for (year, shown) in [
            (json!("soon"), "soon"),
            (json!(2022.5), "2022.5"),
            (json!(true), "true"),
        ] {
            let err = AddCarRequest::from_json(&json!({
                "brand": "Toyota", "model": "Corolla", "year": year, "registration": "X"
            }))
            .unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid year value: {shown}"));
        }
    }

    #[test]
    fn non_string_brand_is_rejected() {
        let err = AddCarRequest::from_json(&json!({
            "brand": 7, "model": "Corolla", "year": 2022, "registration": "X"
        }))
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
