//! Startup Schema Verification
//!
//! Tables are declared in code and checked against the opened store before any
//! data is read. The store is never reflected into an ad-hoc shape: a missing
//! table, a missing column or an incompatible column type fails startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! pub struct OtuTableSchema;
//!
//! impl TableSchema for OtuTableSchema {
//!     fn table_name() -> &'static str { "otu" }
//!
//!     fn expected_columns() -> Vec<ColumnDefinition> {
//!         vec![
//!             ColumnDefinition::new("otu_id", "INTEGER"),
//!             ColumnDefinition::new("lowest_taxonomic_unit_found", "TEXT"),
//!         ]
//!     }
//! }
//!
//! let verified = SchemaCheck::verify_table::<OtuTableSchema>(&pool).await?;
//! ```

use crate::{Error, Result};
use sqlx::{Row, SqlitePool};
use std::fmt;
use tracing::{debug, info};

/// Declared column with its expected SQL type
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Column name (matched case-insensitively, as SQLite does)
    pub name: String,
    /// SQL type (e.g., "TEXT", "INTEGER", "REAL", "NUMERIC")
    pub sql_type: String,
}

impl ColumnDefinition {
    /// Create new column definition
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

/// Policy for columns present in the store but not declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraColumns {
    /// Undeclared columns are tolerated and never read
    Ignore,
    /// Undeclared columns form a dynamic family; each must have this type
    Require(&'static str),
}

/// Actual column from database introspection (PRAGMA table_info result)
#[derive(Debug, Clone)]
pub struct ActualColumn {
    /// Column ID (position in table)
    pub cid: i64,
    /// Column name
    pub name: String,
    /// SQL type from PRAGMA table_info
    pub type_name: String,
}

/// Drift detected between declared and actual schema
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaDrift {
    /// Table missing from database
    MissingTable { table: String },
    /// Declared column missing from table
    MissingColumn { table: String, column: String },
    /// Column type incompatible with the declared type
    TypeMismatch {
        table: String,
        column: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for SchemaDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaDrift::MissingTable { table } => write!(f, "table '{}' does not exist", table),
            SchemaDrift::MissingColumn { column, .. } => write!(f, "missing column '{}'", column),
            SchemaDrift::TypeMismatch {
                column,
                expected,
                actual,
                ..
            } => write!(
                f,
                "column '{}' has type '{}', expected '{}'",
                column, actual, expected
            ),
        }
    }
}

/// Declares expected schema for a database table
pub trait TableSchema {
    /// Table name in database
    fn table_name() -> &'static str;

    /// Columns that must be present
    fn expected_columns() -> Vec<ColumnDefinition>;

    /// How undeclared columns are treated
    fn extra_columns() -> ExtraColumns {
        ExtraColumns::Ignore
    }
}

/// Table that passed verification
#[derive(Debug, Clone)]
pub struct VerifiedTable {
    /// Table name
    pub name: String,
    /// All columns in table order
    pub columns: Vec<ActualColumn>,
    /// Undeclared columns accepted under [`ExtraColumns::Require`], in table order
    pub dynamic_columns: Vec<String>,
}

/// Schema introspection - read actual database schema
pub struct SchemaIntrospector;

impl SchemaIntrospector {
    /// Read actual columns from database table using PRAGMA table_info
    ///
    /// Returns columns in database order (by cid)
    pub async fn introspect_table(pool: &SqlitePool, table_name: &str) -> Result<Vec<ActualColumn>> {
        let rows = sqlx::query("SELECT cid, name, type FROM pragma_table_info(?)")
            .bind(table_name)
            .fetch_all(pool)
            .await?;

        let mut columns = rows
            .iter()
            .map(|row| -> Result<ActualColumn> {
                Ok(ActualColumn {
                    cid: row.try_get("cid")?,
                    name: row.try_get("name")?,
                    type_name: row.try_get("type")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Sort by cid to ensure consistent order
        columns.sort_by_key(|c| c.cid);

        Ok(columns)
    }

    /// Check if table exists
    pub async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM sqlite_master
                WHERE type='table' AND name = ? COLLATE NOCASE
            )
            "#,
        )
        .bind(table_name)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}

/// Schema comparison - detect drift between declared and actual
pub struct SchemaDiff;

impl SchemaDiff {
    /// Compare declared schema to actual database schema
    pub fn compare(
        table_name: &str,
        expected: &[ColumnDefinition],
        extra: ExtraColumns,
        actual: &[ActualColumn],
    ) -> Vec<SchemaDrift> {
        let mut drift = Vec::new();

        for expected_col in expected {
            match actual
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(&expected_col.name))
            {
                Some(actual_col) => {
                    if !Self::types_compatible(&expected_col.sql_type, &actual_col.type_name) {
                        drift.push(SchemaDrift::TypeMismatch {
                            table: table_name.to_string(),
                            column: expected_col.name.clone(),
                            expected: expected_col.sql_type.clone(),
                            actual: actual_col.type_name.clone(),
                        });
                    }
                }
                None => drift.push(SchemaDrift::MissingColumn {
                    table: table_name.to_string(),
                    column: expected_col.name.clone(),
                }),
            }
        }

        if let ExtraColumns::Require(sql_type) = extra {
            for actual_col in Self::undeclared(expected, actual) {
                if !Self::types_compatible(sql_type, &actual_col.type_name) {
                    drift.push(SchemaDrift::TypeMismatch {
                        table: table_name.to_string(),
                        column: actual_col.name.clone(),
                        expected: sql_type.to_string(),
                        actual: actual_col.type_name.clone(),
                    });
                }
            }
        }

        drift
    }

    /// Columns present in the table but not declared
    fn undeclared<'a>(
        expected: &'a [ColumnDefinition],
        actual: &'a [ActualColumn],
    ) -> impl Iterator<Item = &'a ActualColumn> + 'a {
        actual.iter().filter(move |a| {
            !expected
                .iter()
                .any(|e| e.name.eq_ignore_ascii_case(&a.name))
        })
    }

    /// Check if SQL types are compatible (SQLite type affinity rules)
    fn types_compatible(expected: &str, actual: &str) -> bool {
        let exp = expected.to_uppercase();
        let act = actual.to_uppercase();
        let (exp, act) = (exp.as_str(), act.as_str());

        if exp == act {
            return true;
        }

        let is_int = |t: &str| t.contains("INT");
        let is_text = |t: &str| t.contains("TEXT") || t.contains("CHAR") || t.contains("CLOB");
        let is_real = |t: &str| t.contains("REAL") || t.contains("FLOA") || t.contains("DOUB");
        let is_numeric = |t: &str| t.contains("NUMERIC") || t.contains("DECIMAL") || t.contains("BOOL");

        match exp {
            // NUMERIC accepts any integer or real storage
            "NUMERIC" => is_int(act) || is_real(act) || is_numeric(act),
            _ if is_int(exp) => is_int(act),
            _ if is_text(exp) => is_text(act),
            _ if is_real(exp) => is_real(act),
            _ => false,
        }
    }
}

/// Schema verification - fail fast on drift
pub struct SchemaCheck;

impl SchemaCheck {
    /// Verify one table against its declaration
    ///
    /// Returns the verified column layout, or [`Error::SchemaMismatch`]
    /// listing every problem found in the table.
    pub async fn verify_table<T: TableSchema>(pool: &SqlitePool) -> Result<VerifiedTable> {
        let table_name = T::table_name();
        let expected = T::expected_columns();
        let extra = T::extra_columns();

        debug!("Schema check: table '{}'", table_name);

        if !SchemaIntrospector::table_exists(pool, table_name).await? {
            return Err(mismatch(
                table_name,
                &[SchemaDrift::MissingTable {
                    table: table_name.to_string(),
                }],
            ));
        }

        let actual = SchemaIntrospector::introspect_table(pool, table_name).await?;
        let drift = SchemaDiff::compare(table_name, &expected, extra, &actual);

        if !drift.is_empty() {
            return Err(mismatch(table_name, &drift));
        }

        let dynamic_columns = match extra {
            ExtraColumns::Require(_) => SchemaDiff::undeclared(&expected, &actual)
                .map(|c| c.name.clone())
                .collect(),
            ExtraColumns::Ignore => Vec::new(),
        };

        info!(
            "  ✓ Schema verified for '{}' ({} columns)",
            table_name,
            actual.len()
        );

        Ok(VerifiedTable {
            name: table_name.to_string(),
            columns: actual,
            dynamic_columns,
        })
    }
}

fn mismatch(table: &str, drift: &[SchemaDrift]) -> Error {
    Error::SchemaMismatch {
        table: table.to_string(),
        problems: drift.iter().map(|d| d.to_string()).collect(),
    }
}

/// Quote an identifier for interpolation into SQL text
///
/// Column names come from the store itself, so they are quoted rather than
/// validated against a whitelist.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
