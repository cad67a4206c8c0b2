//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// API-level error type that maps to HTTP responses.
///
/// Missing references, conflicts, and persistence failures all arrive
/// wrapped in `DomainError`; `BadRequest` covers the handler-level
/// validation the domain never sees (empty sale, empty cart).
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Domain logic error.
    Domain(DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Domain(err) => domain_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    let status = match &err {
        DomainError::Stock { .. } | DomainError::InvalidTransition { .. } => StatusCode::CONFLICT,
        DomainError::CustomerNotFound(_)
        | DomainError::ItemNotFound(_)
        | DomainError::OrderNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::InvalidDateRange { .. } | DomainError::MissingRentalDates(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::Persistence(_) => {
            tracing::error!(error = %err, "persistence failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_error_maps_to_conflict() {
        let err = ApiError::Domain(DomainError::Stock {
            item_id: "i1".into(),
            requested: 3,
            available: 1,
        });
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_customer_maps_to_not_found() {
        let err = ApiError::Domain(DomainError::CustomerNotFound("nobody".into()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn handler_validation_maps_to_bad_request() {
        let err = ApiError::BadRequest("cart is empty".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_date_range_maps_to_bad_request() {
        let err = ApiError::Domain(DomainError::MissingRentalDates("i1".into()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
