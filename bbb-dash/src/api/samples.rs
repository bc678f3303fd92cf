//! Raw dataset accessors
//!
//! One route per query: sample names, OTU descriptions, metadata, washing
//! frequency and the ranked sample series.

use axum::{
    extract::{Path, State},
    Json,
};
use bbb_common::db::{SampleMetadata, SampleSeries};

use super::ApiError;
use crate::AppState;

/// GET /names
pub async fn list_names(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.list_sample_names().to_vec())
}

/// GET /otu
pub async fn list_otu(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.list_taxonomic_units().to_vec())
}

/// GET /metadata/:sample
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(sample): Path<String>,
) -> Result<Json<SampleMetadata>, ApiError> {
    Ok(Json(state.dataset.sample_metadata(&sample)?))
}

/// GET /wfreq/:sample
pub async fn get_wfreq(
    State(state): State<AppState>,
    Path(sample): Path<String>,
) -> Result<Json<i64>, ApiError> {
    Ok(Json(state.dataset.washing_frequency(&sample)?))
}

/// GET /samples/:sample
///
/// Wrapped in a one-element list, the shape chart clients expect.
pub async fn get_samples(
    State(state): State<AppState>,
    Path(sample): Path<String>,
) -> Result<Json<Vec<SampleSeries>>, ApiError> {
    Ok(Json(vec![state.dataset.sample_series(&sample)?]))
}
