//! In-memory dataset snapshot
//!
//! Built once at startup from the verified store and never mutated. All
//! accessors are synchronous reads against it.

use bbb_common::db::{Cell, SampleMetadata};
use bbb_common::{Error, Result};
use std::collections::HashMap;

mod query;
mod series;

pub use query::{parse_sample_identifier, SAMPLE_PREFIX_LEN};
pub use series::SERIES_THRESHOLD;

/// Metadata row plus its raw washing frequency
#[derive(Debug, Clone)]
pub struct MetadataRecord {
    pub metadata: SampleMetadata,
    /// WFREQ as stored; coerced on lookup
    pub wfreq: Cell,
}

/// Read-only snapshot of the three dataset tables
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Sample column names in table order
    sample_names: Vec<String>,
    /// Column-major counts, aligned with `sample_names`
    columns: Vec<Vec<i64>>,
    column_index: HashMap<String, usize>,
    row_count: usize,
    otu_descriptions: Vec<String>,
    metadata: HashMap<i64, MetadataRecord>,
}

impl Dataset {
    /// Assemble a snapshot, enforcing the dataset invariants
    ///
    /// Fails with [`Error::InvalidData`] when
    /// - `columns` is not aligned with `sample_names`
    /// - sample columns differ in length
    /// - there are more abundance rows than OTU descriptions
    /// - a sample name or metadata identifier appears twice
    pub fn from_parts(
        sample_names: Vec<String>,
        columns: Vec<Vec<i64>>,
        otu_descriptions: Vec<String>,
        metadata: Vec<MetadataRecord>,
    ) -> Result<Self> {
        if sample_names.len() != columns.len() {
            return Err(Error::InvalidData(format!(
                "{} sample names but {} sample columns",
                sample_names.len(),
                columns.len()
            )));
        }

        let row_count = columns.first().map_or(0, Vec::len);
        if let Some((i, _)) = columns.iter().enumerate().find(|(_, c)| c.len() != row_count) {
            return Err(Error::InvalidData(format!(
                "sample {} has {} rows, expected {}",
                sample_names[i],
                columns[i].len(),
                row_count
            )));
        }

        if row_count > otu_descriptions.len() {
            return Err(Error::InvalidData(format!(
                "{} abundance rows but only {} OTU descriptions",
                row_count,
                otu_descriptions.len()
            )));
        }

        let mut column_index = HashMap::with_capacity(sample_names.len());
        for (i, name) in sample_names.iter().enumerate() {
            if column_index.insert(name.clone(), i).is_some() {
                return Err(Error::InvalidData(format!("duplicate sample column {}", name)));
            }
        }

        let mut by_id = HashMap::with_capacity(metadata.len());
        for record in metadata {
            let id = record.metadata.sample_id;
            if by_id.insert(id, record).is_some() {
                return Err(Error::InvalidData(format!(
                    "duplicate metadata for SAMPLEID {}",
                    id
                )));
            }
        }

        Ok(Self {
            sample_names,
            columns,
            column_index,
            row_count,
            otu_descriptions,
            metadata: by_id,
        })
    }

    /// Number of abundance rows (OTUs measured)
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of metadata records
    pub fn metadata_count(&self) -> usize {
        self.metadata.len()
    }

    /// Counts for one sample column, indexed by row
    fn sample_column(&self, name: &str) -> Option<&[i64]> {
        self.column_index
            .get(name)
            .map(|&i| self.columns[i].as_slice())
    }

    fn metadata_record(&self, sample_id: i64) -> Option<&MetadataRecord> {
        self.metadata.get(&sample_id)
    }
}
