//! Authentication middleware.

use productify_service::AuthService;
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub auth_service: Arc<dyn AuthService>,
}

impl AuthMiddlewareState {
    /// Creates a new middleware state.
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }
}

/// Authentication middleware that validates bearer tokens.
///
/// Valid claims are added to the request extensions. Requests without a
/// valid token pass through untouched; handlers that need a caller ask for
/// [`crate::extractors::AuthenticatedUser`].
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned);

    if let Some(token) = token {
        match state.auth_service.validate_token(&token).await {
            Ok(claims) => {
                debug!("Authenticated user: {}", claims.subject());
                request.extensions_mut().insert(claims);
            }
            Err(e) => {
                debug!("Token validation failed: {}", e);
            }
        }
    }

    next.run(request).await
}
