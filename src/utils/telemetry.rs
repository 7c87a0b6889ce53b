//! Logging Setup
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` driven by
//! `RUST_LOG` plus a plain fmt layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const DEFAULT_LOG_FILTER: &str = "co2_calculator=info,tower_http=info";

/// Build the filter, falling back to `DEFAULT_LOG_FILTER` when `RUST_LOG`
/// is unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize logging once per process. Returns an error if a global
/// subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    Registry::default()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}
