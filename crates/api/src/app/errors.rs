use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use fleet_infra::ServiceError;

/// Map a service failure to a transport status.
///
/// The store arm only fires for explicit load/save requests; write-through
/// saves after a mutation never surface as errors.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match &err {
        ServiceError::Domain(e) if e.is_not_found() => json_error(StatusCode::NOT_FOUND, e.to_string()),
        ServiceError::Domain(e) => json_error(StatusCode::BAD_REQUEST, e.to_string()),
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "store failure while handling request");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "error": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::{DomainError, Registration};
    use fleet_infra::StoreError;

    fn reg() -> Registration {
        Registration::new("ABC123").unwrap()
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = service_error_to_response(DomainError::NotFound(reg()).into());
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rejected_mutations_map_to_400() {
        for e in [
            DomainError::AlreadyRented(reg()),
            DomainError::AlreadyAvailable(reg()),
            DomainError::DuplicateRegistration(reg()),
            DomainError::invalid_input("bad"),
        ] {
            assert_eq!(service_error_to_response(e.into()).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = ServiceError::Store(StoreError::Parse("boom".into()));
        assert_eq!(
            service_error_to_response(err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
