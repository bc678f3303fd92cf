//! Configuration loading and resolution
//!
//! Every setting is resolved independently, highest priority first:
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the database path
pub const ENV_DATABASE: &str = "BBB_DATABASE";

/// Environment variable overriding the listen address
pub const ENV_BIND: &str = "BBB_BIND";

/// Compiled default database file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "belly_button_biodiversity.sqlite";

/// Compiled default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:8050";

/// Bootstrap configuration loaded from TOML file
///
/// All keys are optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Path to the SQLite dataset
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// HTTP listen address (host:port)
    #[serde(default)]
    pub bind: Option<String>,
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Cannot parse config file {}: {}", path.display(), e))
        })
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database: Option<PathBuf>,
    pub bind: Option<String>,
    /// Explicit config file; a missing file is an error when set
    pub config_file: Option<PathBuf>,
}

/// Fully resolved dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub database: PathBuf,
    pub bind: String,
}

impl DashboardConfig {
    /// Resolve configuration from overrides, environment, TOML file and defaults
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let toml_config = match &overrides.config_file {
            Some(path) => {
                info!("Loading config file: {}", path.display());
                TomlConfig::load(path)?
            }
            None => match default_config_file() {
                Some(path) if path.exists() => {
                    info!("Loading config file: {}", path.display());
                    TomlConfig::load(&path)?
                }
                _ => {
                    debug!("No config file found, using defaults");
                    TomlConfig::default()
                }
            },
        };

        let database = overrides
            .database
            .or_else(|| std::env::var_os(ENV_DATABASE).map(PathBuf::from))
            .or(toml_config.database)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        let bind = overrides
            .bind
            .or_else(|| std::env::var(ENV_BIND).ok())
            .or(toml_config.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Self { database, bind })
    }
}

/// Platform config file location (`<config_dir>/bbb/config.toml`)
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bbb").join("config.toml"))
}
