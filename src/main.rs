//! Salesboard API Server
//!
//! Run with: cargo run --bin salesboard -- [--config <path>]
//!
//! # Configuration
//!
//! Without `--config` the server looks for `config.toml` in the user config
//! directory, `/etc/salesboard/` and the working directory, falling back to
//! defaults. Environment variables override file settings:
//! - `SALESBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SALESBOARD_API_PORT`: Port to listen on (default: 8082)
//! - `SALESBOARD_DATASET_PATH`: JSON or CSV dataset (default: built-in data)
//! - `SALESBOARD_LOG_LEVEL`: Log level (default: info)
//! - `SALESBOARD_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the log level

use clap::Parser;
use salesboard::api::{serve, AppState};
use salesboard::config::{Config, LoggingConfig};
use salesboard::storage::open_store;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sales analytics API server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Salesboard API server v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate the dataset
    let (store, source) = open_store(config.dataset.path.as_deref().map(Path::new))?;
    tracing::info!(
        dataset = %source,
        years = ?store.years(),
        "Dataset loaded"
    );

    let state = AppState::new(Arc::new(store), source, config.api.clone());

    // Run server
    tracing::info!("Starting server on {}:{}", config.api.host, config.api.port);
    serve(state, &config.api).await?;

    tracing::info!("Salesboard API server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("salesboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
