use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use curio_core::ServiceError;

/// Error kind → status mapping. This is the only place in the service
/// where domain errors become HTTP statuses.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::BadRequest(msg) => json_error(StatusCode::BAD_REQUEST, "bad_request", msg),
        ServiceError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        ServiceError::InvalidAccess(msg) => {
            json_error(StatusCode::FORBIDDEN, "invalid_access", msg)
        }
        ServiceError::Internal(msg) => {
            tracing::error!(message = %msg, "internal error");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
