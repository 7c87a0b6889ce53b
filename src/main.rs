//! CO2 Footprint Calculator service
//!
//! Loads configuration, installs logging and serves the estimation API.

use anyhow::{Context, Result};
use tracing::info;

use co2_calculator::config::ConfigManager;
use co2_calculator::server::run_server;
use co2_calculator::utils::init_logging;

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    init_logging()?;

    let config = ConfigManager::from_env()
        .load()
        .await
        .context("loading calculator configuration")?
        .apply_env()?;

    info!(
        bind_addr = %config.bind_addr,
        quick_comparison = ?config.quick_comparison,
        brazilian = config.averages.brazilian_yearly_tons,
        global = config.averages.global_yearly_tons,
        "configuration loaded"
    );

    run_server(config).await
}
