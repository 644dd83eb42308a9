pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as job_handlers;
use crate::matching::handlers as match_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ping", get(health::ping_handler))
        // Jobs API
        .route("/api/jobs", get(job_handlers::handle_jobs))
        // Resume APIs
        .route(
            "/api/upload-resume",
            post(recommend_handlers::handle_upload_resume),
        )
        .route(
            "/api/recommendations",
            post(recommend_handlers::handle_recommendations),
        )
        .route(
            "/api/upload-and-recommend",
            post(recommend_handlers::handle_upload_and_recommend),
        )
        // Matching API
        .route("/match-jobs", post(match_handlers::handle_match_jobs))
        .route("/search-jobs", post(job_handlers::handle_search_jobs))
        .route(
            "/explain-match",
            post(match_handlers::handle_explain_match),
        )
        .with_state(state)
}
