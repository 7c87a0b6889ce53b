//! Reference Averages
//!
//! Baseline yearly emissions per person (tons CO2), national and global.

use serde::{Deserialize, Serialize};

use crate::utils::round::round2;

pub const AVERAGES_UNIT: &str = "toneladas CO2/ano";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceAverages {
    pub brazilian_yearly_tons: f64,
    pub global_yearly_tons: f64,
}

impl Default for ReferenceAverages {
    fn default() -> Self {
        Self {
            brazilian_yearly_tons: 4.6,
            global_yearly_tons: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageFigure {
    pub annual: f64,
    pub monthly: f64,
    pub unit: String,
}

impl AverageFigure {
    fn from_annual(annual: f64) -> Self {
        Self {
            annual,
            monthly: round2(annual / 12.0),
            unit: AVERAGES_UNIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragesReport {
    pub brazilian: AverageFigure,
    pub global: AverageFigure,
}

impl ReferenceAverages {
    pub fn report(&self) -> AveragesReport {
        AveragesReport {
            brazilian: AverageFigure::from_annual(self.brazilian_yearly_tons),
            global: AverageFigure::from_annual(self.global_yearly_tons),
        }
    }

    /// Both averages finite and strictly positive
    pub fn is_valid(&self) -> bool {
        [self.brazilian_yearly_tons, self.global_yearly_tons]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_monthly() {
        let report = ReferenceAverages::default().report();
        assert_eq!(report.brazilian.annual, 4.6);
        assert_eq!(report.brazilian.monthly, 0.38);
        assert_eq!(report.global.monthly, 0.33);
        assert_eq!(report.global.unit, "toneladas CO2/ano");
    }

    #[test]
    fn test_validity() {
        assert!(ReferenceAverages::default().is_valid());
        let bad = ReferenceAverages { brazilian_yearly_tons: 0.0, global_yearly_tons: 4.0 };
        assert!(!bad.is_valid());
    }
}
