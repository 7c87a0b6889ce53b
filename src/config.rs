//! Calculator Configuration
//!
//! Loaded once at startup from an optional YAML/JSON file, then adjusted by
//! environment variables. The engine never sees configuration changes after
//! construction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use crate::emissions::{CarbonEngine, FactorTable, QuickComparisonBasis, ReferenceAverages};

pub const DEFAULT_CONFIG_PATH: &str = "co2_calculator.yaml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("reference averages must be finite and positive (brazilian={brazilian}, global={global})")]
    InvalidAverages { brazilian: f64, global: f64 },

    #[error("invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub bind_addr: String,
    pub averages: ReferenceAverages,
    pub quick_comparison: QuickComparisonBasis,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            averages: ReferenceAverages::default(),
            quick_comparison: QuickComparisonBasis::default(),
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.averages.is_valid() {
            return Err(ConfigError::InvalidAverages {
                brazilian: self.averages.brazilian_yearly_tons,
                global: self.averages.global_yearly_tons,
            });
        }
        Ok(())
    }

    /// Apply `PORT` and `CO2_QUICK_COMPARISON` on top of the file values.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        self.apply_overrides(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("CO2_QUICK_COMPARISON").ok().as_deref(),
        )?;
        Ok(self)
    }

    fn apply_overrides(&mut self, port: Option<&str>, basis: Option<&str>) -> Result<(), ConfigError> {
        if let Some(port) = port {
            let port: u16 = port.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
                var: "PORT",
                reason: e.to_string(),
            })?;
            let host = self
                .bind_addr
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .unwrap_or_else(|| "0.0.0.0".to_string());
            self.bind_addr = format!("{}:{}", host, port);
        }
        if let Some(basis) = basis {
            self.quick_comparison = basis
                .parse()
                .map_err(|reason| ConfigError::InvalidEnv { var: "CO2_QUICK_COMPARISON", reason })?;
        }
        Ok(())
    }

    /// Build the engine this configuration describes
    pub fn build_engine(&self) -> CarbonEngine {
        CarbonEngine::new(FactorTable::standard(), self.averages).with_quick_basis(self.quick_comparison)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from `CO2_CONFIG`, falling back to the default file name
    pub fn from_env() -> Self {
        Self::new(std::env::var("CO2_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()))
    }

    pub async fn load(&self) -> Result<CalculatorConfig, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(CalculatorConfig::default());
        }
        let content = fs::read_to_string(&self.path).await.map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        let config: CalculatorConfig = if content.trim().is_empty() {
            warn!(path = %self.path.display(), "config file is empty, using defaults");
            CalculatorConfig::default()
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }
}
