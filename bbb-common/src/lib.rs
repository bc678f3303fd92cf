//! # Biodiversity Common Library
//!
//! Shared code for the biodiversity dashboard including:
//! - Error types
//! - Configuration resolution
//! - Declared dataset schema and startup verification
//! - Dataset models

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
