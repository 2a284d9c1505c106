//! JSON API over the loaded board.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use serde::Serialize;

use crate::board::dates::format_long;
use crate::board::{Board, Criteria, Job, SearchParams};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_jobs: usize,
    pub new_today: usize,
    pub last_updated: String,
}

fn ensure_loaded(board: &Board) -> Result<(), AppError> {
    match board.load_error() {
        Some(e) => Err(AppError::Unavailable(e.user_message().to_string())),
        None => Ok(()),
    }
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<JobsResponse>, AppError> {
    ensure_loaded(&state.board)?;
    let criteria = Criteria::from_params(&params)?;

    let jobs: Vec<Job> = state
        .board
        .search(&criteria, Local::now())
        .map_err(|e| AppError::Unavailable(e.user_message().to_string()))?
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(JobsResponse {
        count: jobs.len(),
        jobs,
    }))
}

/// GET /api/v1/categories
pub async fn handle_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    ensure_loaded(&state.board)?;
    Ok(Json(state.board.categories().to_vec()))
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    ensure_loaded(&state.board)?;
    let stats = state.board.stats().unwrap_or_default();
    Ok(Json(StatsResponse {
        total_jobs: stats.total_jobs,
        new_today: stats.new_today,
        last_updated: format_long(Local::now()),
    }))
}
