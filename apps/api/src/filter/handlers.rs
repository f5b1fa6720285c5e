use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogSummary, RefreshOutcome};
use crate::errors::AppError;
use crate::filter::{
    filter_jobs, Direction, FacetDefinition, FacetKind, PageState, SelectionState, PAGE_SIZE,
};
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(default)]
    pub page: PageState,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<JobPosting>,
    pub total: usize,
    pub page: PageState,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(default)]
    pub page: PageState,
    pub facet: FacetKind,
    pub value: String,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct ViewState {
    pub selection: SelectionState,
    pub page: PageState,
}

#[derive(Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(default)]
    pub page: PageState,
    pub direction: Direction,
}

#[derive(Serialize)]
pub struct PageResponse {
    pub page: PageState,
}

/// GET /api/v1/jobs/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<CatalogSummary> {
    Json(state.catalog.snapshot().await.summary())
}

/// POST /api/v1/jobs/refresh
pub async fn handle_refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshOutcome>, AppError> {
    let outcome = state
        .catalog
        .refresh(state.job_source.as_ref(), req.keyword.trim())
        .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/jobs/facets
pub async fn handle_get_facets(State(state): State<AppState>) -> Json<Vec<FacetDefinition>> {
    Json(state.catalog.snapshot().await.facets.clone())
}

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let snapshot = state.catalog.snapshot().await;
    let filtered = filter_jobs(&snapshot.jobs, &req.selection, state.config.salary_bucket_units);
    let total = filtered.len();
    debug!(
        "Search matched {total} of {} jobs, serving page {}",
        snapshot.jobs.len(),
        req.page.current()
    );

    Json(SearchResponse {
        jobs: req.page.slice(&filtered).iter().map(|j| (*j).clone()).collect(),
        total,
        page: req.page,
        page_size: PAGE_SIZE,
        has_previous: req.page.has_previous(),
        has_next: req.page.has_next(total),
    })
}

/// POST /api/v1/jobs/selection/toggle
pub async fn handle_toggle(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ViewState>, AppError> {
    if req.value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "A value is required to toggle '{}'",
            req.facet.label()
        )));
    }

    let selection = req.selection.toggle(req.facet, req.value, req.checked);
    let page = if state.config.reset_page_on_filter {
        PageState::first()
    } else {
        req.page
    };
    Ok(Json(ViewState { selection, page }))
}

/// POST /api/v1/jobs/page
pub async fn handle_navigate(
    State(state): State<AppState>,
    Json(req): Json<PageRequest>,
) -> Result<Json<PageResponse>, AppError> {
    let snapshot = state.catalog.snapshot().await;
    let total = filter_jobs(&snapshot.jobs, &req.selection, state.config.salary_bucket_units).len();
    let page = req.page.step(req.direction, total)?;
    Ok(Json(PageResponse { page }))
}
