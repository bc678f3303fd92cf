//! HTTP API handlers for bbb-dash

pub mod buildinfo;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod samples;

pub use buildinfo::get_build_info;
pub use dashboard::{get_dashboard, get_default_dashboard};
pub use error::ApiError;
pub use health::health_routes;
pub use samples::{get_metadata, get_samples, get_wfreq, list_names, list_otu};
