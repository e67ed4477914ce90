//! Router configuration for the authgate HTTP adapter.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    login, logout, profile, register, request_reset_token, update_password, welcome, AppState,
};

/// Create the main router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/users", post(register))
        .route("/sessions", post(login).delete(logout))
        .route("/profile", get(profile))
        .route("/reset_password", post(request_reset_token).put(update_password))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
        .merge(create_health_router())
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
