//! Database access layer
//!
//! The store is opened read-only, verified against the declared schema and
//! read once into a [`crate::dataset::Dataset`].

use bbb_common::{Error, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;

mod loader;
pub use loader::load_dataset;

/// Connect to database with read-only mode
///
/// Opens the file with SQLite mode=ro to prevent any write operations
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::Config(format!(
            "Database not found: {}",
            db_path.display()
        )));
    }

    // immutable: SQLite won't write even for internal operations
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .immutable(true);

    let pool = SqlitePool::connect_with(options).await?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            pool.close().await;
            return Err(Error::Internal(
                "database connection is not read-only".to_string(),
            ));
        }
    }

    Ok(pool)
}
