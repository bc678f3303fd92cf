//! bbb-dash library - Belly Button Biodiversity dashboard backend
//!
//! Serves the sample selector's data: raw dataset accessors and the combined
//! chart view for a selected sample, all read from an in-memory snapshot.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod dataset;
pub mod db;
pub mod views;

use dataset::Dataset;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only dataset snapshot
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let accessors = Router::new()
        .route("/names", get(api::list_names))
        .route("/otu", get(api::list_otu))
        .route("/metadata/:sample", get(api::get_metadata))
        .route("/wfreq/:sample", get(api::get_wfreq))
        .route("/samples/:sample", get(api::get_samples));

    let views = Router::new()
        .route("/api/dashboard", get(api::get_default_dashboard))
        .route("/api/dashboard/:sample", get(api::get_dashboard));

    let public = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        .merge(accessors)
        .merge(views)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
