//! Salary Dashboard Static Server
//!
//! Run with: cargo run --bin salary-dashboard-api
//!
//! Serves the raw dataset at `/data/salaries.json` and the built frontend.
//!
//! # Configuration
//!
//! Config file: `--config PATH`, otherwise the default locations
//! (see `salary-dashboard config`). Environment variables:
//! - `SALARY_DASHBOARD_SOURCE`: Dataset file (default: data/salaries.json)
//! - `SALARY_DASHBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SALARY_DASHBOARD_API_PORT`: Port to listen on (default: 8082)
//! - `SALARY_DASHBOARD_STATIC_DIR`: Frontend directory (default: dashboard-ui/dist)
//! - `RUST_LOG`: Log filter (default: from config)

use clap::Parser;
use std::path::PathBuf;

use salary_dashboard::api::{serve, AppState};
use salary_dashboard::config::{Config, LoadReport};

#[derive(Parser)]
#[command(name = "salary-dashboard-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Static server for the salary dashboard")]
struct Args {
    /// Config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, report) = match &args.config {
        Some(path) => (Config::load_with_env(path)?, LoadReport::from_file(path)),
        None => Config::load_default(),
    };
    config.logging.init();
    report.log();

    tracing::info!(
        "Starting salary dashboard server v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Dataset: {}", config.dataset.source);
    tracing::info!("Frontend directory: {}", config.api.static_dir);

    let state = AppState::new(&config.dataset.source, config.api.clone());
    if state.dataset_path.is_none() {
        tracing::warn!("Dataset is remote; /data/salaries.json will not be served");
    } else if !state.dataset_available().await {
        tracing::warn!("Dataset file not found: {}", config.dataset.source);
    }

    serve(state, &config.api).await?;

    tracing::info!("Salary dashboard server stopped");
    Ok(())
}
