//! Dataset schema declarations and models

pub mod models;
pub mod schema_check;
pub mod table_schemas;

pub use models::*;
pub use schema_check::*;
pub use table_schemas::*;
