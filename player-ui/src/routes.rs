//! HTTP route handlers for the UI API.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use tracing::warn;

use player::core::generate::generate;
use player::core::types::{ExecutionStep, Problem};

use crate::state::AppState;
use crate::submissions::{
    PerformanceSummary, SubmissionFilter, SubmissionRecord, filter_submissions, load_submissions,
    summarize,
};

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/problems", get(list_problems))
        .route("/problems/{id}", get(get_problem))
        .route("/problems/{id}/steps", get(get_problem_steps))
        .route("/submissions", get(list_submissions))
        .route("/submissions/stats", get(get_submission_stats))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /api/problems - the full catalog.
async fn list_problems(State(state): State<AppState>) -> Result<Json<Vec<Problem>>, StatusCode> {
    let catalog = load_catalog_or_500(&state)?;
    Ok(Json(catalog.problems().to_vec()))
}

/// GET /api/problems/:id - one problem.
async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Problem>, StatusCode> {
    let catalog = load_catalog_or_500(&state)?;
    let problem = catalog.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(problem.clone()))
}

/// GET /api/problems/:id/steps - the generated step sequence.
async fn get_problem_steps(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ExecutionStep>>, StatusCode> {
    let catalog = load_catalog_or_500(&state)?;
    let problem = catalog.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(generate(problem)))
}

/// GET /api/submissions?status=&title=&since= - filtered history.
async fn list_submissions(
    State(state): State<AppState>,
    Query(filter): Query<SubmissionFilter>,
) -> Result<Json<Vec<SubmissionRecord>>, StatusCode> {
    let submissions = load_submissions_or_500(&state)?;
    let matched = filter_submissions(&submissions, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(matched))
}

/// GET /api/submissions/stats - aggregate performance summary.
async fn get_submission_stats(
    State(state): State<AppState>,
) -> Result<Json<PerformanceSummary>, StatusCode> {
    let submissions = load_submissions_or_500(&state)?;
    Ok(Json(summarize(&submissions)))
}

fn load_catalog_or_500(
    state: &AppState,
) -> Result<player::io::catalog::Catalog, StatusCode> {
    state.catalog().map_err(|err| {
        warn!(error = %err, "catalog load failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn load_submissions_or_500(state: &AppState) -> Result<Vec<SubmissionRecord>, StatusCode> {
    load_submissions(state.submissions_path.as_deref()).map_err(|err| {
        warn!(error = %err, "submissions load failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
