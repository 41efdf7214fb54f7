use axum::{http::StatusCode, response::IntoResponse, Json};

use banklite_ledger::loan_products;

pub async fn list_loan_products() -> axum::response::Response {
    (StatusCode::OK, Json(loan_products())).into_response()
}
