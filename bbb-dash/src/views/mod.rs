//! Chart view models
//!
//! Pure shaping of query results into the structures each dashboard panel
//! draws from. Nothing here touches the store.

pub mod bubble;
pub mod dashboard;
pub mod donut;
pub mod gauge;
pub mod metadata;

pub use bubble::{bubble_view, BubbleView};
pub use dashboard::{dashboard_view, DashboardView, Panel};
pub use donut::{donut_view, DonutView};
pub use gauge::{gauge_view, GaugeBand, GaugeView, Needle};
pub use metadata::{MetadataEntry, MetadataPanel};

/// OTU description for a series id; empty when out of range
fn describe(units: &[String], otu_id: usize) -> String {
    units.get(otu_id).cloned().unwrap_or_default()
}
