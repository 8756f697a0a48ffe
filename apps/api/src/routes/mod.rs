pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Proposal API: JSON result, or the same pipeline rendered as a PDF download
        .route("/api/v1/proposals", post(handlers::handle_generate))
        .route("/api/v1/proposals/report", post(handlers::handle_report))
        .with_state(state)
}
