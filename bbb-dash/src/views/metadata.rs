//! Metadata panel

use bbb_common::db::SampleMetadata;
use serde::Serialize;

/// One `LABEL: value` line of the panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataEntry {
    pub label: &'static str,
    pub value: String,
}

/// Sample metadata as ordered display lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataPanel {
    pub entries: Vec<MetadataEntry>,
}

impl From<&SampleMetadata> for MetadataPanel {
    fn from(meta: &SampleMetadata) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        let entries = vec![
            ("AGE", meta.age.to_text().unwrap_or_default()),
            ("BBTYPE", text(&meta.bb_type)),
            ("ETHNICITY", text(&meta.ethnicity)),
            ("GENDER", text(&meta.gender)),
            ("LOCATION", text(&meta.location)),
            ("SAMPLEID", meta.sample_id.to_string()),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(label, value)| MetadataEntry { label, value })
                .collect(),
        }
    }
}
