//! SpaceX Launch Dashboard HTTP Server Binary
//!
//! Loads the launch table, builds the selection coordinator and serves the
//! dashboard API.
//!
//! # Usage
//!
//! ```bash
//! # Uses dashboard.toml if present, otherwise defaults
//! cargo run --bin spacex-dash-server
//!
//! # Point at another launch table
//! SPACEX_DATA_PATH=/data/spacex_launch_dash.csv cargo run --bin spacex-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `SPACEX_DATA_PATH`: Launch table CSV (default: spacex_launch_dash.csv)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use spacex_dash::config::DashboardConfig;
use spacex_dash::http::{create_router, AppState};
use spacex_dash::io::DatasetLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SpaceX launch dashboard server");

    let config = DashboardConfig::from_default_location()?.with_env_overrides()?;
    config.controls.validate()?;

    // A missing or malformed launch table is fatal
    let dataset = DatasetLoader::load_from_file(&config.data.path).with_context(|| {
        format!(
            "Failed to load launch table from {}",
            config.data.path.display()
        )
    })?;
    info!(
        "Loaded {} launches across {} sites (checksum {})",
        dataset.len(),
        dataset.site_catalog().len(),
        dataset.checksum()
    );

    let state = AppState::new(Arc::new(dataset), config.controls.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Dashboard layout: http://{}/v1/layout", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
