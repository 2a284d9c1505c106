//! HTML routes. The query string carries the search criteria.

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Local;

use crate::board::SearchParams;
use crate::errors::AppError;
use crate::render::{render_page, render_results};
use crate::state::AppState;

/// GET /
///
/// Full page: search form, stats and results for the submitted criteria.
pub async fn handle_index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let html = render_page(
        &state.board,
        &params,
        &state.config.company_options,
        Local::now(),
    )?;
    Ok(Html(html))
}

/// GET /jobs
///
/// Results fragment only: cards, the empty state, or an error block.
pub async fn handle_results(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let html = render_results(&state.board, &params, Local::now())?;
    Ok(Html(html))
}
