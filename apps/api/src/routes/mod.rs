pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/upload", post(handlers::handle_upload))
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        .route("/api/v1/resumes/clear", delete(handlers::handle_clear))
        .with_state(state)
}
