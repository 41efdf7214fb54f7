use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use banklite_auth::BearerToken;

use crate::app::services::AppServices;
use crate::context::CurrentUser;

/// Attach a [`CurrentUser`] when the bearer token names a known user.
///
/// Never rejects: unauthenticated requests pass through and handlers decide.
pub async fn auth_shim(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(token) = extract_bearer(req.headers()) {
        match services.principal_for_token(&token) {
            Ok(Some(principal)) => {
                req.extensions_mut().insert(CurrentUser::new(principal));
            }
            Ok(None) => {
                tracing::debug!("bearer token does not match any user");
            }
            Err(e) => {
                tracing::warn!("user lookup for bearer token failed: {e}");
            }
        }
    }

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<BearerToken> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    BearerToken::from_header(header).ok()
}

/// Permissive CORS: any origin, and preflights answered directly.
pub async fn cors(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut res = StatusCode::NO_CONTENT.into_response();
        allow_cors(res.headers_mut());
        return res;
    }

    let mut res = next.run(req).await;
    allow_cors(res.headers_mut());
    res
}

fn allow_cors(headers: &mut HeaderMap) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,HEAD,PUT,PATCH,POST,DELETE"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("authorization,content-type"),
    );
}
