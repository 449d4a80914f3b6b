pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planning::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Webhook hand-off (email text in the query string)
        .route("/plan", get(handlers::handle_plan_webhook))
        // Manual entry
        .route("/api/v1/plan", post(handlers::handle_plan))
        .with_state(state)
}
