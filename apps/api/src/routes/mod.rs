pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // PDF rendering API
        .route("/api/v1/pdf/resume", post(handlers::handle_structured_resume))
        .route(
            "/api/v1/pdf/resume/markdown",
            post(handlers::handle_markdown_resume),
        )
        .route(
            "/api/v1/pdf/cover-letter",
            post(handlers::handle_cover_letter),
        )
        .with_state(state)
}
