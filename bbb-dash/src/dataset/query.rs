//! Query layer: sample names, OTU descriptions, per-sample metadata lookups

use bbb_common::db::SampleMetadata;
use bbb_common::{Error, Result};

use super::{Dataset, MetadataRecord};

/// Length of the sample-name prefix in front of the numeric identifier (`BB_`)
pub const SAMPLE_PREFIX_LEN: usize = 3;

/// Numeric metadata identifier for a sample name (`"BB_940"` → `940`)
///
/// The prefix is dropped without inspecting it.
pub fn parse_sample_identifier(sample_id: &str) -> Option<i64> {
    sample_id.get(SAMPLE_PREFIX_LEN..)?.parse().ok()
}

impl Dataset {
    /// Every sample column name, in table column order
    pub fn list_sample_names(&self) -> &[String] {
        &self.sample_names
    }

    /// Every OTU description, in table row order
    pub fn list_taxonomic_units(&self) -> &[String] {
        &self.otu_descriptions
    }

    /// Donor metadata for a sample name such as `BB_940`
    pub fn sample_metadata(&self, sample_id: &str) -> Result<SampleMetadata> {
        self.lookup(sample_id).map(|record| record.metadata.clone())
    }

    /// Weekly washing frequency for a sample name, coerced to an integer
    ///
    /// Fails with [`Error::NotFound`] for an unknown sample and
    /// [`Error::Malformed`] when the stored value is NULL or non-numeric.
    pub fn washing_frequency(&self, sample_id: &str) -> Result<i64> {
        let record = self.lookup(sample_id)?;
        record.wfreq.to_integer(&format!("WFREQ for {}", sample_id))
    }

    fn lookup(&self, sample_id: &str) -> Result<&MetadataRecord> {
        parse_sample_identifier(sample_id)
            .and_then(|id| self.metadata_record(id))
            .ok_or_else(|| Error::NotFound(format!("metadata for sample {}", sample_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture;
    use super::*;
    use bbb_common::db::Cell;

    #[test]
    fn test_parse_sample_identifier() {
        assert_eq!(parse_sample_identifier("BB_940"), Some(940));
        assert_eq!(parse_sample_identifier("XX_12"), Some(12));
        assert_eq!(parse_sample_identifier("BB_"), None);
        assert_eq!(parse_sample_identifier("BB"), None);
        assert_eq!(parse_sample_identifier("BB_abc"), None);
        assert_eq!(parse_sample_identifier("éé"), None);
    }

    #[test]
    fn test_list_sample_names_in_column_order() {
        let dataset = fixture::dataset();
        assert_eq!(dataset.list_sample_names(), ["BB_940", "BB_941", "BB_943"]);
    }

    #[test]
    fn test_list_taxonomic_units_keeps_duplicates() {
        let dataset = fixture::dataset();
        let units = dataset.list_taxonomic_units();

        assert_eq!(units.len(), 6);
        assert_eq!(units[0], "Bacteria");
        assert_eq!(units[5], "Bacteria");
    }

    #[test]
    fn test_sample_metadata_found() {
        let dataset = fixture::dataset();
        let meta = dataset.sample_metadata("BB_940").unwrap();

        assert_eq!(meta.sample_id, 940);
        assert_eq!(meta.age, Cell::Integer(24));
        assert_eq!(meta.location.as_deref(), Some("Beaufort/NC"));
        assert_eq!(meta.bb_type.as_deref(), Some("I"));
    }

    #[test]
    fn test_sample_metadata_unknown_is_not_found() {
        let dataset = fixture::dataset();

        for sample in ["BB_999", "BB_", "nope", ""] {
            let err = dataset.sample_metadata(sample).unwrap_err();
            assert!(matches!(err, Error::NotFound(_)), "{} should be NotFound", sample);
        }
    }

    #[test]
    fn test_washing_frequency() {
        let dataset = fixture::dataset();

        assert_eq!(dataset.washing_frequency("BB_940").unwrap(), 2);
        // Stored as REAL 1.0
        assert_eq!(dataset.washing_frequency("BB_943").unwrap(), 1);
    }

    #[test]
    fn test_washing_frequency_null_is_malformed() {
        let dataset = fixture::dataset();
        let err = dataset.washing_frequency("BB_941").unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_washing_frequency_unknown_is_not_found() {
        let dataset = fixture::dataset();
        let err = dataset.washing_frequency("BB_1").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
