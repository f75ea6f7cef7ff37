use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;
use crate::app::services::AppServices;

pub const API_VERSION: &str = "1.0";

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// API information and endpoint index.
pub async fn home(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let agency = services.rental().agency_name().to_string();
    Json(serde_json::json!({
        "message": "Car Fleet Management API",
        "version": API_VERSION,
        "agency": agency,
        "endpoints": {
            "GET /": "API information",
            "GET /health": "Liveness check",
            "GET /swagger.yaml": "OpenAPI specification",
            "GET /api/docs": "Swagger UI",
            "GET /api/cars": "Get all cars",
            "GET /api/cars/available": "Get available cars",
            "GET /api/cars/{registration}": "Get car details",
            "POST /api/cars": "Add a new car",
            "PUT /api/cars/{registration}/rent": "Rent a car",
            "PUT /api/cars/{registration}/return": "Return a car",
            "DELETE /api/cars/{registration}": "Delete a car",
            "GET /api/stats": "Get fleet statistics",
        },
    }))
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "Endpoint not found")
}
