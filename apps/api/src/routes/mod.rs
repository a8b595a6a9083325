pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::manuscript::handlers as manuscript;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Manuscript intake
        .route("/api/upload", post(manuscript::handle_upload))
        .route("/api/clear", post(manuscript::handle_clear))
        .route("/api/manuscript", get(manuscript::handle_manuscript_status))
        // Generation
        .route("/api/gemini", post(generation::handle_generate))
        .route("/api/sections", get(generation::handle_list_sections))
        .route("/api/feedback", post(generation::handle_section_feedback))
        // Report
        .route("/api/report", post(report::handle_download_report))
        .layer(body_limit)
        .with_state(state)
}
