//! bbb-dash - Belly Button Biodiversity dashboard backend
//!
//! Opens the biodiversity SQLite dataset read-only, verifies it against the
//! declared schema, snapshots it into memory and serves the dashboard API.

use anyhow::Result;
use bbb_common::config::{ConfigOverrides, DashboardConfig};
use bbb_dash::{build_router, db, AppState};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// Command-line arguments; unset values fall back to environment, config file, defaults
#[derive(Debug, Parser)]
#[command(name = "bbb-dash", version, about = "Belly Button Biodiversity dashboard backend")]
struct Cli {
    /// Path to the SQLite dataset
    #[arg(long)]
    database: Option<PathBuf>,

    /// Listen address (host:port)
    #[arg(long)]
    bind: Option<String>,

    /// TOML config file
    #[arg(long, env = "BBB_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification before any database work
    info!(
        "Starting Belly Button Biodiversity dashboard (bbb-dash) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = DashboardConfig::resolve(ConfigOverrides {
        database: cli.database,
        bind: cli.bind,
        config_file: cli.config,
    })?;

    info!("Database path: {}", config.database.display());

    let pool = match db::connect_readonly(&config.database).await {
        Ok(pool) => {
            info!("✓ Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let dataset = match db::load_dataset(&pool).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };

    // Everything is in memory now
    pool.close().await;

    let state = AppState::new(dataset);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("bbb-dash listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
