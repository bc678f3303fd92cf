//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Sizes of the loaded snapshot
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub samples: usize,
    pub taxonomic_units: usize,
    pub metadata_records: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub dataset: DatasetSummary,
}

/// GET /health
///
/// Reports the snapshot sizes loaded at startup.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = &state.dataset;

    Json(HealthResponse {
        status: "ok",
        module: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        dataset: DatasetSummary {
            samples: dataset.list_sample_names().len(),
            taxonomic_units: dataset.list_taxonomic_units().len(),
            metadata_records: dataset.metadata_count(),
        },
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
