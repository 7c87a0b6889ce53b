//! Services Module
//!
//! Collaborator services that sit beside the estimation engine.

pub mod results;

pub use results::{save_result, SaveRequest, SavedResult};
