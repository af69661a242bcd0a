pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cover_letter::handlers as cover_letter;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Cover letter gateway
        .route("/api/generate", post(cover_letter::handle_generate))
        // Resume header
        .route("/api/resume/platforms", get(resume::handle_list_platforms))
        .route("/api/resume/header", post(resume::handle_build_header))
        .with_state(state)
}
