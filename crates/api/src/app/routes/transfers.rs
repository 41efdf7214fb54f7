use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use banklite_core::AccountId;
use banklite_ledger::Transfer;

use crate::app::routes::accounts::require_user;
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;

/// Move money between two of the caller's own accounts in one store write.
pub async fn create_transfer(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
    body: Result<Json<dto::TransferRequest>, JsonRejection>,
) -> axum::response::Response {
    let user = match require_user(current) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    const REQUIRED: &str = "fromAccountId, toAccountId, and amount are required";
    let Ok(Json(body)) = body else {
        return errors::bad_request(REQUIRED);
    };
    let transfer = match (
        dto::non_empty(body.from_account_id),
        dto::non_empty(body.to_account_id),
        body.amount,
    ) {
        (Some(from), Some(to), Some(amount)) => Transfer {
            from: AccountId::from(from),
            to: AccountId::from(to),
            amount,
        },
        _ => return errors::bad_request(REQUIRED),
    };

    match services
        .update_user(user.user_id(), move |u, _| u.transfer(&transfer))
        .await
    {
        Ok((from, to)) => {
            tracing::info!(
                user_id = %user.user_id(),
                from = %from.id,
                to = %to.id,
                "transfer completed"
            );
            (
                StatusCode::OK,
                Json(serde_json::json!({ "from": from, "to": to })),
            )
                .into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
