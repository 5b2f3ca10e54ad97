use crate::interface_adapters::handlers::{event_details, health, logout, verify_code};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/verify", post(verify_code))
        .route("/api/details", get(event_details))
        .route("/api/logout", post(logout))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
