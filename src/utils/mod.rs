//! Utils Module
pub mod json;
pub mod round;
pub mod telemetry;

pub use json::{is_truthy, truthy_text};
pub use round::{round2, round_to};
pub use telemetry::init_logging;
