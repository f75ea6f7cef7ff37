use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_cars).post(add_car))
        .route("/available", get(list_available_cars))
        .route("/:registration", get(get_car).delete(delete_car))
        .route("/:registration/rent", put(rent_car))
        .route("/:registration/return", put(return_car))
}

pub async fn list_cars(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let rental = services.rental();
    let body = dto::CarListResponse::new(rental.all_cars().iter().collect());
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn list_available_cars(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let rental = services.rental();
    let body = dto::CarListResponse::new(rental.available_cars());
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_car(
    Extension(services): Extension<Arc<AppServices>>,
    Path(registration): Path<String>,
) -> axum::response::Response {
    let rental = services.rental();
    match rental.find_car(&registration) {
        Ok(car) => (StatusCode::OK, Json(dto::CarResponse::found(car.clone()))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn add_car(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.body_text()),
    };
    let req = match dto::AddCarRequest::from_json(&body) {
        Ok(r) => r,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let result = services
        .rental()
        .add_car(&req.brand, &req.model, req.year, &req.registration);
    match result {
        Ok(car) => (StatusCode::CREATED, Json(dto::CarResponse::changed(car, "added"))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn rent_car(
    Extension(services): Extension<Arc<AppServices>>,
    Path(registration): Path<String>,
) -> axum::response::Response {
    let result = services.rental().rent_car(&registration);
    match result {
        Ok(car) => (StatusCode::OK, Json(dto::CarResponse::changed(car, "rented"))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn return_car(
    Extension(services): Extension<Arc<AppServices>>,
    Path(registration): Path<String>,
) -> axum::response::Response {
    let result = services.rental().return_car(&registration);
    match result {
        Ok(car) => (StatusCode::OK, Json(dto::CarResponse::changed(car, "returned"))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_car(
    Extension(services): Extension<Arc<AppServices>>,
    Path(registration): Path<String>,
) -> axum::response::Response {
    let result = services.rental().delete_car(&registration);
    match result {
        Ok(car) => (StatusCode::OK, Json(dto::CarResponse::deleted(car))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn fleet_stats(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let stats = services.rental().fleet_stats();
    (
        StatusCode::OK,
        Json(dto::StatsResponse {
            success: true,
            stats,
        }),
    )
        .into_response()
}
