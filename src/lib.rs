//! CO2 Footprint Calculator
//!
//! Estimates an individual's carbon dioxide emissions from self-reported
//! activity with:
//! - Static emission factor table and reference averages
//! - Quick (single trip) and detailed (monthly household) estimates
//! - Severity classification and comparison against national/global averages
//! - Category-scoped recommendations
//! - A thin axum service exposing the engine over HTTP

pub mod emissions;
pub mod config;
pub mod services;
pub mod utils;
pub mod server;

// Re-exports for convenience
pub use emissions::{CarbonEngine, EstimateError, FactorTable, ReferenceAverages};
pub use config::{CalculatorConfig, ConfigManager};
