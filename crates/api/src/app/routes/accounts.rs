use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use banklite_core::AccountId;
use banklite_ledger::NewAccount;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;

/// The authenticated user, or the 401 response to send instead.
pub(crate) fn require_user(
    current: Option<Extension<CurrentUser>>,
) -> Result<CurrentUser, axum::response::Response> {
    current
        .map(|Extension(user)| user)
        .ok_or_else(|| errors::unauthorized("Unauthorized"))
}

pub async fn list_accounts(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
) -> axum::response::Response {
    let user = match require_user(current) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    match services.accounts_of(user.user_id()) {
        Ok(accounts) => (StatusCode::OK, Json(accounts)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn add_account(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
    body: Result<Json<dto::AddAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let user = match require_user(current) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    const REQUIRED: &str = "Name, type, and initialBalance are required";
    let Ok(Json(body)) = body else {
        return errors::bad_request(REQUIRED);
    };
    let new = match (dto::non_empty(body.name), dto::non_empty(body.kind), body.initial_balance) {
        (Some(name), Some(kind), Some(initial_balance)) => NewAccount {
            name,
            kind,
            initial_balance,
        },
        _ => return errors::bad_request(REQUIRED),
    };

    match services
        .update_user(user.user_id(), move |u, ids| u.add_account(ids, new))
        .await
    {
        Ok(account) => {
            tracing::info!(user_id = %user.user_id(), account_id = %account.id, "account opened");
            (StatusCode::CREATED, Json(account)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn remove_account(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let user = match require_user(current) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    let account_id = AccountId::from(id);
    let target = account_id.clone();
    match services
        .update_user(user.user_id(), move |u, _| u.remove_account(&target))
        .await
    {
        Ok(_) => {
            tracing::info!(user_id = %user.user_id(), account_id = %account_id, "account removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn rename_account(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
    Path(id): Path<String>,
    body: Result<Json<dto::RenameAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let user = match require_user(current) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    let Some(new_name) = body.ok().and_then(|Json(b)| dto::non_empty(b.new_name)) else {
        return errors::bad_request("New name is required");
    };

    let account_id = AccountId::from(id);
    match services
        .update_user(user.user_id(), move |u, _| u.rename_account(&account_id, &new_name))
        .await
    {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn adjust_balance(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
    Path(id): Path<String>,
    body: Result<Json<dto::AdjustBalanceRequest>, JsonRejection>,
) -> axum::response::Response {
    let user = match require_user(current) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    let Some(amount) = body.ok().and_then(|Json(b)| b.amount) else {
        return errors::bad_request("Amount is required and must be a number");
    };

    let account_id = AccountId::from(id);
    match services
        .update_user(user.user_id(), move |u, _| u.adjust_balance(&account_id, amount))
        .await
    {
        Ok(account) => {
            tracing::info!(
                user_id = %user.user_id(),
                account_id = %account.id,
                amount,
                balance = account.balance,
                "balance adjusted"
            );
            (StatusCode::OK, Json(account)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
