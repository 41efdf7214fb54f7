use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use banklite_core::DomainError;
use banklite_infra::StoreError;

use crate::app::services::{AppServices, ServiceError};
use crate::app::{dto, errors};

const CREDENTIALS_REQUIRED: &str = "Username and password are required";

fn credentials(
    body: Result<Json<dto::CredentialsRequest>, JsonRejection>,
) -> Result<(String, String), axum::response::Response> {
    let Ok(Json(body)) = body else {
        return Err(errors::bad_request(CREDENTIALS_REQUIRED));
    };
    match (dto::non_empty(body.username), dto::non_empty(body.password)) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(errors::bad_request(CREDENTIALS_REQUIRED)),
    }
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CredentialsRequest>, JsonRejection>,
) -> axum::response::Response {
    let (username, password) = match credentials(body) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match services.register(username, password).await {
        Ok(user) => (StatusCode::CREATED, Json(user.public_view())).into_response(),
        Err(ServiceError::Store(StoreError::Domain(DomainError::Conflict(_)))) => {
            errors::json_error(StatusCode::CONFLICT, "conflict", "User already exists")
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CredentialsRequest>, JsonRejection>,
) -> axum::response::Response {
    let (username, password) = match credentials(body) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match services.login(&username, password).await {
        Ok(Some(user)) => {
            tracing::info!(user_id = %user.id, "login succeeded");
            (StatusCode::OK, Json(user.public_view())).into_response()
        }
        Ok(None) => {
            tracing::warn!(username = %username, "login rejected");
            errors::unauthorized("Invalid credentials")
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
