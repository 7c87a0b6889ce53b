//! Comparator
//!
//! Places a yearly tonnage against the reference averages. First match wins:
//! at or below global, then at or below national, otherwise above national.

use serde::{Deserialize, Serialize};

use super::averages::ReferenceAverages;
use crate::utils::round::{round2, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    BelowGlobal,
    BelowBrazilian,
    AboveBrazilian,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub status: ComparisonStatus,
    /// Tons, 2 decimal places
    pub difference: f64,
    /// Percent of the relevant average, 1 decimal place
    pub percentage: f64,
    pub message: String,
}

pub fn compare(yearly_tons: f64, averages: &ReferenceAverages) -> ComparisonResult {
    let global = averages.global_yearly_tons;
    let brazilian = averages.brazilian_yearly_tons;

    let (status, difference, percentage) = if yearly_tons <= global {
        (ComparisonStatus::BelowGlobal, global - yearly_tons, yearly_tons / global * 100.0)
    } else if yearly_tons <= brazilian {
        (ComparisonStatus::BelowBrazilian, brazilian - yearly_tons, yearly_tons / brazilian * 100.0)
    } else {
        (ComparisonStatus::AboveBrazilian, yearly_tons - brazilian, yearly_tons / brazilian * 100.0)
    };

    let difference = round2(difference);
    ComparisonResult {
        status,
        difference,
        percentage: round_to(percentage, 1),
        message: comparison_message(status, difference, averages),
    }
}

fn comparison_message(status: ComparisonStatus, difference: f64, averages: &ReferenceAverages) -> String {
    match status {
        ComparisonStatus::BelowGlobal => format!(
            "Parabéns! Você está {:.2} toneladas abaixo da média global de {} toneladas.",
            difference, averages.global_yearly_tons
        ),
        ComparisonStatus::BelowBrazilian => format!(
            "Você está próximo à média brasileira. {:.2} toneladas abaixo de {} toneladas.",
            difference, averages.brazilian_yearly_tons
        ),
        ComparisonStatus::AboveBrazilian => format!(
            "Você está {:.2} toneladas acima da média brasileira de {} toneladas. Procure reduzir suas emissões!",
            difference, averages.brazilian_yearly_tons
        ),
    }
}
