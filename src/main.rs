//! Epimap Dashboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Flags take precedence over config-file and environment settings:
//! - `--config <path>`: explicit config file
//! - `--host <host>` / `--port <port>`: bind address
//!
//! Environment variables:
//! - `EPIMAP_HOST`: Host to bind to (default: 0.0.0.0)
//! - `EPIMAP_PORT`: Port to listen on (default: 8090)
//! - `EPIMAP_ENABLE_EXPORT`: Enable CSV download (default: true)
//! - `EPIMAP_LOG_LEVEL` / `EPIMAP_LOG_FORMAT`: Logging overrides
//! - `RUST_LOG`: Full tracing filter (overrides EPIMAP_LOG_LEVEL)

use anyhow::Context;
use clap::Parser;
use epimap::api::{serve, ApiConfig, AppState};
use epimap::config::Config;
use epimap::dataset::{CountryAliases, Dataset};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "epimap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Global disease distribution dashboard")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    init_tracing(&config);

    tracing::info!("Starting Epimap dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Build the dataset once; it is invariant for the process lifetime.
    let aliases = CountryAliases::default();
    let dataset = Dataset::load(&aliases);
    dataset
        .validate()
        .context("literal dataset failed validation")?;

    let (year_min, year_max) = dataset
        .year_bounds()
        .context("dataset has no records")?;
    tracing::info!(
        records = dataset.len(),
        year_min,
        year_max,
        aliases = aliases.len(),
        "Dataset loaded"
    );

    let api_config = ApiConfig {
        host: cli.host.unwrap_or(config.server.host),
        port: cli.port.unwrap_or(config.server.port),
        enable_export: config.server.enable_export,
    };

    let state = AppState::new(Arc::new(dataset), api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Epimap dashboard stopped");
    Ok(())
}

/// Initialize the tracing subscriber from logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("epimap={},tower_http=info", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
