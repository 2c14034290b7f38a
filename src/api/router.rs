use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::tokens;

/// Create the router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/tokens", post(tokens::issue_token))
        .route("/tokens/verify", get(tokens::verify_token))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
