use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod accounts;
pub mod auth;
pub mod loans;
pub mod system;
pub mod transfers;

/// Routes that never look at the bearer token.
pub fn public_router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/loan-products", get(loans::list_loan_products))
}

/// Routes behind the auth shim (user-scoped).
pub fn router() -> Router {
    Router::new()
        .route("/api/accounts", get(accounts::list_accounts).post(accounts::add_account))
        .route("/api/accounts/:id", delete(accounts::remove_account))
        .route("/api/accounts/:id/name", put(accounts::rename_account))
        .route("/api/accounts/:id/balance", put(accounts::adjust_balance))
        .route("/api/transfers", post(transfers::create_transfer))
        .route("/api/whoami", get(system::whoami))
}
