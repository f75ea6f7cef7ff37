use axum::{routing::get, Router};

pub mod cars;
pub mod docs;
pub mod system;

/// Router for every endpoint the API serves.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::home))
        .route("/health", get(system::health))
        .route(docs::SWAGGER_SPEC_PATH, get(docs::swagger_spec))
        .route("/api/docs", get(docs::swagger_ui))
        .route("/api/stats", get(cars::fleet_stats))
        .nest("/api/cars", cars::router())
}
