//! Detailed-Estimate Flow
//!
//! Monthly quantities across all three categories. Never fails: absent
//! categories are empty and unusable entries are dropped by the aggregator.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::{aggregate, ActivityQuantities};
use super::averages::ReferenceAverages;
use super::classify::{classify, EmissionClass};
use super::compare::{compare, ComparisonResult};
use super::factors::{Category, FactorTable};
use super::recommend::{recommend, Recommendation};
use crate::utils::round::{round2, round_to};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedRequest {
    #[serde(default)]
    pub transport: ActivityQuantities,
    #[serde(default)]
    pub energy: ActivityQuantities,
    #[serde(default)]
    pub consumption: ActivityQuantities,
}

impl DetailedRequest {
    pub fn quantities(&self, category: Category) -> &ActivityQuantities {
        match category {
            Category::Transport => &self.transport,
            Category::Energy => &self.energy,
            Category::Consumption => &self.consumption,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEmission {
    pub emission_kg: f64,
    /// Share of the monthly total, 0 when the total is 0
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub transport: CategoryEmission,
    pub energy: CategoryEmission,
    pub consumption: CategoryEmission,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub monthly_kg: f64,
    pub yearly_tons: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedResult {
    pub categories: CategoryBreakdown,
    pub totals: Totals,
    pub comparison: ComparisonResult,
    pub class: EmissionClass,
    pub recommendations: Vec<Recommendation>,
}

fn share(part: f64, total: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        round_to(part / total * 100.0, 1)
    } else {
        0.0
    }
}

pub fn estimate_detailed(
    table: &FactorTable,
    averages: &ReferenceAverages,
    request: &DetailedRequest,
) -> DetailedResult {
    let [transport, energy, consumption] =
        Category::ALL.map(|c| aggregate(table, c, request.quantities(c)));

    let total_monthly = transport + energy + consumption;
    let total_yearly = total_monthly * 12.0;
    let yearly_tons = total_yearly / 1000.0;
    let class = classify(yearly_tons);

    debug!(transport, energy, consumption, total_monthly, %class, "detailed estimate");

    let entry = |kg: f64| CategoryEmission {
        emission_kg: round2(kg),
        percentage: share(kg, total_monthly),
    };

    DetailedResult {
        categories: CategoryBreakdown {
            transport: entry(transport),
            energy: entry(energy),
            consumption: entry(consumption),
        },
        totals: Totals {
            monthly_kg: round2(total_monthly),
            yearly_tons: round2(yearly_tons),
        },
        comparison: compare(yearly_tons, averages),
        class,
        recommendations: recommend(transport, energy, consumption),
    }
}
