//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Selection events go through the shared coordinator; the
//! stateless view queries compute directly from the dataset.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use log::info;

use super::dto::{
    DashboardLayout, DashboardViews, HealthResponse, PayloadRangeRequest, PayloadScatterQuery,
    PieChartDescriptor, ScatterChartDescriptor, SelectionState, SiteListResponse,
    SiteSelectionRequest, SuccessPieQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::error::InvalidSelectionError;
use crate::models::{PayloadRange, SiteSelection};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the loaded launch table.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
        dataset_checksum: state.dataset.checksum().to_string(),
    }))
}

// =============================================================================
// Layout and catalog
// =============================================================================

/// GET /v1/layout
///
/// Static dashboard layout: title, site dropdown and payload slider.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(services::build_dashboard_layout(
        &state.dataset,
        &state.controls,
    )))
}

/// GET /v1/sites
pub async fn list_sites(State(state): State<AppState>) -> HandlerResult<SiteListResponse> {
    let catalog = state.dataset.site_catalog();
    Ok(Json(SiteListResponse {
        sites: catalog.entries(),
        total: catalog.len(),
    }))
}

// =============================================================================
// Selection state
// =============================================================================

/// GET /v1/selection
pub async fn get_selection(State(state): State<AppState>) -> HandlerResult<SelectionState> {
    Ok(Json(state.coordinator.lock().state().clone()))
}

/// GET /v1/views
///
/// The most recently published pair of chart descriptors.
pub async fn get_views(State(state): State<AppState>) -> HandlerResult<DashboardViews> {
    state
        .views
        .snapshot()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No views have been published yet".to_string()))
}

/// POST /v1/selection/site
///
/// Apply a site selection event and return the republished views.
pub async fn set_site(
    State(state): State<AppState>,
    request: Result<Json<SiteSelectionRequest>, JsonRejection>,
) -> HandlerResult<DashboardViews> {
    let Json(request) = request?;
    let views = state.coordinator.lock().set_site(&request.site)?;
    info!("Site selection applied: {}", views.selection.site);
    Ok(Json(views))
}

/// POST /v1/selection/payload-range
///
/// Apply a payload range event and return the republished views.
pub async fn set_payload_range(
    State(state): State<AppState>,
    request: Result<Json<PayloadRangeRequest>, JsonRejection>,
) -> HandlerResult<DashboardViews> {
    let Json(request) = request?;
    let views = state
        .coordinator
        .lock()
        .set_payload_range(request.low, request.high)?;
    info!(
        "Payload range applied: [{}, {}]",
        views.selection.payload_range.low.value(),
        views.selection.payload_range.high.value()
    );
    Ok(Json(views))
}

// =============================================================================
// Stateless view queries
// =============================================================================

fn resolve_site(state: &AppState, site: Option<&str>) -> Result<SiteSelection, AppError> {
    match site {
        Some(site) => Ok(state.dataset.site_catalog().resolve(site)?),
        None => Ok(SiteSelection::All),
    }
}

/// GET /v1/views/success-pie?site=
pub async fn get_success_pie(
    State(state): State<AppState>,
    query: Result<Query<SuccessPieQuery>, QueryRejection>,
) -> HandlerResult<PieChartDescriptor> {
    let Query(query) = query?;
    let site = resolve_site(&state, query.site.as_deref())?;
    let view = services::compute_success_distribution(&state.dataset, &site);
    Ok(Json(services::build_pie_descriptor(&view)))
}

/// GET /v1/views/payload-scatter?site=&low=&high=
///
/// Missing bounds default to the dataset's payload extent. An inverted range
/// is answered with an empty scatter; non-finite bounds are rejected.
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    query: Result<Query<PayloadScatterQuery>, QueryRejection>,
) -> HandlerResult<ScatterChartDescriptor> {
    let Query(query) = query?;
    let site = resolve_site(&state, query.site.as_deref())?;
    let default_range = state.dataset.default_payload_range();
    let low = query.low.unwrap_or(default_range.low.value());
    let high = query.high.unwrap_or(default_range.high.value());
    let range = match PayloadRange::validated(low, high) {
        Err(InvalidSelectionError::InvertedRange { .. }) => PayloadRange::between(low, high),
        result => result?,
    };
    let view = services::compute_payload_outcome(&state.dataset, &site, &range);
    Ok(Json(services::build_scatter_descriptor(&view)))
}
