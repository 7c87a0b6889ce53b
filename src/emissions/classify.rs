//! Emission Classifier

use serde::{Deserialize, Serialize};

/// Severity band for a yearly tonnage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionClass {
    Low,
    Medium,
    High,
}

impl EmissionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for EmissionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const LOW_CEILING_TONS: f64 = 2.0;
const MEDIUM_CEILING_TONS: f64 = 5.0;

/// Bounds are inclusive on the lower class. Total: NaN lands in `High`.
pub fn classify(yearly_tons: f64) -> EmissionClass {
    if yearly_tons <= LOW_CEILING_TONS {
        EmissionClass::Low
    } else if yearly_tons <= MEDIUM_CEILING_TONS {
        EmissionClass::Medium
    } else {
        EmissionClass::High
    }
}
