//! Authentication controller.

use crate::{
    extractors::JsonBody,
    responses::{ok, ApiResult},
    state::AppState,
};
use productify_service::{LoginRequest, LoginResponse};
use axum::{extract::State, routing::post, Router};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Exchange the administrator credentials for a bearer token.
async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<LoginResponse> {
    debug!("Login request for: {}", request.username);

    let response = state.auth_service.login(request).await?;
    ok(response)
}
