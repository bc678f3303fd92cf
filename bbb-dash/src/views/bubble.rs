//! Bubble plot of every OTU above threshold

use bbb_common::db::SampleSeries;
use serde::Serialize;

use super::describe;

/// x = OTU id (also the colour scale), y and size = count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleView {
    pub otu_ids: Vec<usize>,
    pub sample_values: Vec<i64>,
    /// OTU description per marker
    pub text: Vec<String>,
}

pub fn bubble_view(series: &SampleSeries, units: &[String]) -> BubbleView {
    BubbleView {
        otu_ids: series.otu_ids.clone(),
        sample_values: series.sample_values.clone(),
        text: series.otu_ids.iter().map(|&id| describe(units, id)).collect(),
    }
}
