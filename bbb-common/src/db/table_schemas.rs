//! Table Schema Definitions
//!
//! Single source of truth for the three dataset tables. Each struct declares
//! the columns the loader reads; the store is checked against them at startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! let schema = verify_all_table_schemas(&pool).await?;
//! println!("{} sample columns", schema.sample_columns.len());
//! ```

use crate::db::schema_check::{ColumnDefinition, ExtraColumns, SchemaCheck, TableSchema};
use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Abundance matrix: one row per OTU, one INTEGER column per sample
pub struct SamplesTableSchema;

impl SamplesTableSchema {
    /// Key column; every other column is a sample
    pub const KEY_COLUMN: &'static str = "otu_id";
}

impl TableSchema for SamplesTableSchema {
    fn table_name() -> &'static str {
        "samples"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![ColumnDefinition::new(Self::KEY_COLUMN, "INTEGER")]
    }

    fn extra_columns() -> ExtraColumns {
        ExtraColumns::Require("INTEGER")
    }
}

/// Taxonomic unit descriptions, row-aligned with `samples`
pub struct OtuTableSchema;

impl OtuTableSchema {
    pub const DESCRIPTION_COLUMN: &'static str = "lowest_taxonomic_unit_found";
}

impl TableSchema for OtuTableSchema {
    fn table_name() -> &'static str {
        "otu"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("otu_id", "INTEGER"),
            ColumnDefinition::new(Self::DESCRIPTION_COLUMN, "TEXT"),
        ]
    }
}

/// Per-sample donor metadata
///
/// The store carries more survey columns than these; they are ignored.
pub struct SamplesMetadataTableSchema;

impl TableSchema for SamplesMetadataTableSchema {
    fn table_name() -> &'static str {
        "samples_metadata"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("SAMPLEID", "NUMERIC"),
            ColumnDefinition::new("ETHNICITY", "TEXT"),
            ColumnDefinition::new("GENDER", "TEXT"),
            ColumnDefinition::new("AGE", "NUMERIC"),
            ColumnDefinition::new("LOCATION", "TEXT"),
            ColumnDefinition::new("BBTYPE", "TEXT"),
            ColumnDefinition::new("WFREQ", "NUMERIC"),
        ]
    }
}

/// Layout facts established by the startup check
#[derive(Debug, Clone)]
pub struct DatasetSchema {
    /// Sample column names in table order
    pub sample_columns: Vec<String>,
}

/// Verify all dataset tables
///
/// Fails with [`crate::Error::SchemaMismatch`] on the first table that drifts
/// from its declaration.
pub async fn verify_all_table_schemas(pool: &SqlitePool) -> Result<DatasetSchema> {
    info!("Verifying dataset schema");

    let samples = SchemaCheck::verify_table::<SamplesTableSchema>(pool).await?;
    SchemaCheck::verify_table::<OtuTableSchema>(pool).await?;
    SchemaCheck::verify_table::<SamplesMetadataTableSchema>(pool).await?;

    info!(
        "Dataset schema verified ({} sample columns)",
        samples.dynamic_columns.len()
    );

    Ok(DatasetSchema {
        sample_columns: samples.dynamic_columns,
    })
}
