//! Dashboard view endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use bbb_common::Error;

use super::ApiError;
use crate::views::{dashboard_view, DashboardView};
use crate::AppState;

/// GET /api/dashboard/:sample
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(sample): Path<String>,
) -> Result<Json<DashboardView>, ApiError> {
    Ok(Json(dashboard_view(&state.dataset, &sample)?))
}

/// GET /api/dashboard
///
/// Dashboard for the first sample, the selector's initial value.
pub async fn get_default_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, ApiError> {
    let sample = state
        .dataset
        .list_sample_names()
        .first()
        .ok_or_else(|| Error::NotFound("no samples in dataset".to_string()))?;

    Ok(Json(dashboard_view(&state.dataset, sample)?))
}
