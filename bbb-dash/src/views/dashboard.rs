//! Combined view for one selected sample

use bbb_common::Result;
use serde::Serialize;
use tracing::warn;

use super::{bubble_view, donut_view, gauge_view, BubbleView, DonutView, GaugeView, MetadataPanel};
use crate::dataset::Dataset;

/// A panel that may fail independently of the rest of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    Unavailable { reason: String },
}

impl<T> Panel<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Panel::Ready(_))
    }
}

/// Everything the page renders for the selected sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub sample: String,
    pub metadata: Panel<MetadataPanel>,
    pub donut: DonutView,
    pub gauge: Panel<GaugeView>,
    pub bubble: BubbleView,
}

/// Build the dashboard for one sample name
///
/// An unknown sample fails the whole view. Missing metadata or an unusable
/// washing frequency only marks the affected panel unavailable.
pub fn dashboard_view(dataset: &Dataset, sample: &str) -> Result<DashboardView> {
    let series = dataset.sample_series(sample)?;
    let units = dataset.list_taxonomic_units();

    let metadata = match dataset.sample_metadata(sample) {
        Ok(meta) => Panel::Ready(MetadataPanel::from(&meta)),
        Err(e) => {
            warn!("Metadata unavailable for {}: {}", sample, e);
            Panel::Unavailable {
                reason: e.to_string(),
            }
        }
    };

    let gauge = match dataset.washing_frequency(sample) {
        Ok(frequency) => Panel::Ready(gauge_view(frequency)),
        Err(e) => {
            warn!("Washing frequency unavailable for {}: {}", sample, e);
            Panel::Unavailable {
                reason: e.to_string(),
            }
        }
    };

    Ok(DashboardView {
        sample: sample.to_string(),
        metadata,
        donut: donut_view(&series, units),
        gauge,
        bubble: bubble_view(&series, units),
    })
}
