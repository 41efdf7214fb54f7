use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use banklite_core::DomainError;
use banklite_infra::StoreError;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Store(StoreError::Domain(e)) => domain_error_to_response(e),
        ServiceError::Store(e) => {
            tracing::error!("user store failure: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", "failed to save changes")
        }
        ServiceError::Password(e) => {
            tracing::error!("password hashing failure: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "password_error", "internal error")
        }
        ServiceError::Join(e) => {
            tracing::error!("blocking task failure: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound(what) => not_found(what),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// `"account"` → `"Account not found"`.
pub fn not_found(what: &str) -> axum::response::Response {
    let mut chars = what.chars();
    let subject = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => "Resource".to_string(),
    };
    json_error(StatusCode::NOT_FOUND, "not_found", format!("{subject} not found"))
}

pub fn bad_request(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

pub fn unauthorized(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::UNAUTHORIZED, "unauthorized", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let message: String = message.into();
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message,
        })),
    )
        .into_response()
}
