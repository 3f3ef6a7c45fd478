use crate::{api, health, state::AppState};

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Protected route group: the auth middleware runs before any of
    // these handlers and attaches the identity record.
    let api_routes = Router::new()
        .route("/session", get(api::session::session::get_session))
        .route(
            "/dashboard/token",
            get(api::dashboard::dashboard::get_dashboard_token),
        )
        .route(
            "/dashboard/config",
            get(api::dashboard::dashboard::get_dashboard_config),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api::middleware::authenticate,
        ));

    Router::new()
        .nest("/api", api_routes)
        // Health check endpoints (unauthenticated: probed by the platform)
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
