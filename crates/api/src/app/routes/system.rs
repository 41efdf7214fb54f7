use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::routes::accounts::require_user;
use crate::context::CurrentUser;

pub async fn root() -> &'static str {
    "Backend is running!"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Who the bearer token resolved to.
pub async fn whoami(current: Option<Extension<CurrentUser>>) -> axum::response::Response {
    match require_user(current) {
        Ok(user) => Json(serde_json::json!({
            "id": user.user_id(),
            "username": user.username(),
        }))
        .into_response(),
        Err(resp) => resp,
    }
}
