//! Donut chart of the top OTUs in a sample

use bbb_common::db::SampleSeries;
use serde::Serialize;

use super::describe;

/// Slices shown in the donut
pub const DONUT_SLICES: usize = 10;

/// Inner hole as a fraction of the radius
pub const DONUT_HOLE: f64 = 0.4;

/// Slice colours, largest slice first
pub const DONUT_COLORS: [&str; DONUT_SLICES] = [
    "#add8e6", "#b7dde5", "#c0e1e5", "#cae5e4", "#d3e9e4",
    "#dceee3", "#e4f2e2", "#eef7e1", "#f6fae1", "#ffffe0",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutView {
    pub otu_ids: Vec<usize>,
    pub values: Vec<i64>,
    /// OTU description per slice
    pub hovertext: Vec<String>,
    pub hole: f64,
    pub colors: &'static [&'static str],
}

/// Top [`DONUT_SLICES`] entries of a ranked series
pub fn donut_view(series: &SampleSeries, units: &[String]) -> DonutView {
    let top = series.top(DONUT_SLICES);
    let hovertext = top.otu_ids.iter().map(|&id| describe(units, id)).collect();

    DonutView {
        otu_ids: top.otu_ids,
        values: top.sample_values,
        hovertext,
        hole: DONUT_HOLE,
        colors: &DONUT_COLORS,
    }
}
