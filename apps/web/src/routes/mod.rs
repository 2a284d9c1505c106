pub mod api;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser pages
        .route("/", get(pages::handle_index))
        .route("/jobs", get(pages::handle_results))
        // JSON API
        .route("/api/v1/jobs", get(api::handle_list_jobs))
        .route("/api/v1/categories", get(api::handle_categories))
        .route("/api/v1/stats", get(api::handle_stats))
        .with_state(state)
}
