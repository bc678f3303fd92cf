//! Sample series accessor

use bbb_common::db::SampleSeries;
use bbb_common::{Error, Result};

use super::Dataset;

/// Counts at or below this are dropped from a series
pub const SERIES_THRESHOLD: i64 = 1;

impl Dataset {
    /// Abundance series for one sample, largest count first
    ///
    /// Keeps rows whose count is strictly greater than [`SERIES_THRESHOLD`].
    /// Equal counts keep ascending row order. Returned ids are row indices
    /// into [`Dataset::list_taxonomic_units`].
    pub fn sample_series(&self, sample_name: &str) -> Result<SampleSeries> {
        let column = self
            .sample_column(sample_name)
            .ok_or_else(|| Error::NotFound(format!("sample {}", sample_name)))?;

        let mut ranked: Vec<(usize, i64)> = column
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, value)| value > SERIES_THRESHOLD)
            .collect();

        // Stable sort keeps row order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let (otu_ids, sample_values) = ranked.into_iter().unzip();

        Ok(SampleSeries {
            otu_ids,
            sample_values,
        })
    }
}
