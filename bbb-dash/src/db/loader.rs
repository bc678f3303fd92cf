//! Table loading into the dataset snapshot

use bbb_common::db::{
    quote_identifier, verify_all_table_schemas, Cell, OtuTableSchema, SampleMetadata,
    SamplesTableSchema, TableSchema,
};
use bbb_common::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool, TypeInfo, ValueRef};
use tracing::info;

use crate::dataset::{Dataset, MetadataRecord};

/// Verify the store and read all three tables into memory
pub async fn load_dataset(pool: &SqlitePool) -> Result<Dataset> {
    let schema = verify_all_table_schemas(pool).await?;

    let columns = load_abundance(pool, &schema.sample_columns).await?;
    let otu_descriptions = load_otu_descriptions(pool).await?;
    let metadata = load_metadata(pool).await?;

    let dataset = Dataset::from_parts(schema.sample_columns, columns, otu_descriptions, metadata)?;

    info!(
        "Dataset loaded: {} samples, {} OTU rows, {} metadata records",
        dataset.list_sample_names().len(),
        dataset.row_count(),
        dataset.metadata_count()
    );

    Ok(dataset)
}

/// Read the abundance matrix column-major, in natural row order
async fn load_abundance(pool: &SqlitePool, sample_columns: &[String]) -> Result<Vec<Vec<i64>>> {
    // The key column keeps the SELECT valid when there are no sample columns
    let select_list = std::iter::once(quote_identifier(SamplesTableSchema::KEY_COLUMN))
        .chain(sample_columns.iter().map(|c| quote_identifier(c)))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "SELECT {} FROM {}",
        select_list,
        quote_identifier(SamplesTableSchema::table_name())
    );

    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    let mut columns = vec![Vec::with_capacity(rows.len()); sample_columns.len()];
    for row in &rows {
        for (i, name) in sample_columns.iter().enumerate() {
            // Offset by one for the key column
            let count = match read_cell(row, i + 1)? {
                Cell::Integer(v) => v,
                Cell::Null => 0,
                other => other.to_integer(&format!("samples.{}", name))?,
            };
            columns[i].push(count);
        }
    }

    Ok(columns)
}

async fn load_otu_descriptions(pool: &SqlitePool) -> Result<Vec<String>> {
    let sql = format!(
        "SELECT {} FROM {}",
        quote_identifier(OtuTableSchema::DESCRIPTION_COLUMN),
        quote_identifier(OtuTableSchema::table_name())
    );

    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter()
        .map(|row| -> Result<String> { Ok(read_cell(row, 0)?.to_text().unwrap_or_default()) })
        .collect()
}

async fn load_metadata(pool: &SqlitePool) -> Result<Vec<MetadataRecord>> {
    let rows = sqlx::query(
        "SELECT SAMPLEID, ETHNICITY, GENDER, AGE, LOCATION, BBTYPE, WFREQ FROM samples_metadata",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<MetadataRecord> {
            let sample_id = read_cell(row, 0)?.to_integer("samples_metadata.SAMPLEID")?;
            Ok(MetadataRecord {
                metadata: SampleMetadata {
                    sample_id,
                    ethnicity: read_cell(row, 1)?.to_text(),
                    gender: read_cell(row, 2)?.to_text(),
                    age: read_cell(row, 3)?,
                    location: read_cell(row, 4)?.to_text(),
                    bb_type: read_cell(row, 5)?.to_text(),
                },
                wfreq: read_cell(row, 6)?,
            })
        })
        .collect()
}

/// Read one value by its storage class
fn read_cell(row: &SqliteRow, index: usize) -> Result<Cell> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Cell::Null);
    }

    let storage = raw.type_info().name().to_string();
    match storage.as_str() {
        "INTEGER" => Ok(Cell::Integer(row.try_get(index)?)),
        "REAL" => Ok(Cell::Real(row.try_get(index)?)),
        "TEXT" => Ok(Cell::Text(row.try_get(index)?)),
        other => Err(Error::Malformed(format!(
            "column {} holds an unsupported {} value",
            index, other
        ))),
    }
}
