//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: user store, password hasher and id generator behind one handle
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and validation helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    // Account routes: the shim attaches the user, handlers enforce it.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        services.clone(),
        middleware::auth_shim,
    ));

    Router::new()
        .merge(routes::public_router())
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::cors))
                .layer(Extension(services)),
        )
}

pub use services::AppServices;
