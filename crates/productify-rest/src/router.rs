//! Main application router.

use crate::{
    controllers::{auth_controller, category_controller, health_controller, product_controller},
    middleware::{auth_middleware, logging_middleware, AuthMiddlewareState},
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Router};
use productify_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);
    let auth_state = AuthMiddlewareState::new(state.auth_service.clone());

    let api_router = Router::new()
        .nest(category_controller::PATH, category_controller::router())
        .nest(product_controller::PATH, product_controller::router())
        .nest("/auth", auth_controller::router())
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state);

    let router = Router::new()
        .merge(health_controller::router())
        .merge(api_router)
        .route("/", get(root))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!(
        "Router created with {} and {} endpoints",
        category_controller::PATH,
        product_controller::PATH
    );
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Productify API"
}
