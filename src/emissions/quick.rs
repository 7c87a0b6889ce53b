//! Quick-Estimate Flow
//!
//! Single trip: distance × transport factor, strictly validated.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use super::averages::ReferenceAverages;
use super::classify::{classify, EmissionClass};
use super::compare::{compare, ComparisonResult};
use super::error::{EstimateError, EstimateResult};
use super::factors::{Category, FactorTable};
use super::recommend::recommend_for;
use crate::utils::json::truthy_text;
use crate::utils::round::{round2, round_to};

pub const QUICK_REQUIRED_FIELDS: [&str; 4] = ["origin", "destination", "distance", "transportType"];

/// How a single trip is scaled before classification and comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickComparisonBasis {
    /// Class from the trip's kg figure, comparison on trip tons / 12
    #[default]
    Literal,
    /// Trip treated as monthly: class and comparison on trip tons × 12
    Annualized,
}

impl std::str::FromStr for QuickComparisonBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "annualized" => Ok(Self::Annualized),
            other => Err(format!("unknown quick comparison basis '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub transport_type: Option<String>,
}

impl QuickRequest {
    pub fn new(origin: &str, destination: &str, distance: f64, transport_type: &str) -> Self {
        Self {
            origin: Some(origin.to_string()),
            destination: Some(destination.to_string()),
            distance: Some(distance),
            transport_type: Some(transport_type.to_string()),
        }
    }
}

/// Falsy JSON (null, false, 0, "") reads as absent; other values as text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(truthy_text))
}

/// Numbers or numeric strings; anything else reads as absent.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickResult {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    /// Human-readable label of the resolved transport kind
    pub transport_type: String,
    pub emission_kg: f64,
    pub emission_tons: f64,
    pub class: EmissionClass,
    pub comparison: ComparisonResult,
    pub recommendation: String,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

pub fn estimate_quick(
    table: &FactorTable,
    averages: &ReferenceAverages,
    basis: QuickComparisonBasis,
    request: &QuickRequest,
) -> EstimateResult<QuickResult> {
    let missing = || EstimateError::MissingField { fields: QUICK_REQUIRED_FIELDS.to_vec() };

    let origin = present(&request.origin).ok_or_else(missing)?;
    let destination = present(&request.destination).ok_or_else(missing)?;
    let distance = request.distance.filter(|d| !d.is_nan()).ok_or_else(missing)?;
    let transport_id = present(&request.transport_type).ok_or_else(missing)?;

    if distance <= 0.0 || !distance.is_finite() {
        return Err(EstimateError::InvalidDistance { distance });
    }

    let factor = table
        .lookup_id(transport_id)
        .filter(|f| f.category == Category::Transport)
        .ok_or_else(|| EstimateError::UnknownTransportKind {
            given: transport_id.to_string(),
            valid: table.kinds_in(Category::Transport),
        })?;

    let emission_kg = distance * factor.per_unit_kg;
    let emission_tons = emission_kg / 1000.0;

    let (class, comparison) = match basis {
        QuickComparisonBasis::Literal => (
            classify(emission_kg),
            compare(emission_tons / 12.0, averages),
        ),
        QuickComparisonBasis::Annualized => {
            let yearly_tons = emission_tons * 12.0;
            (classify(yearly_tons), compare(yearly_tons, averages))
        }
    };

    debug!(transport = transport_id, distance, emission_kg, %class, "quick estimate");

    Ok(QuickResult {
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance,
        transport_type: factor.label.clone(),
        emission_kg: round2(emission_kg),
        emission_tons: round_to(emission_tons, 4),
        class,
        comparison,
        recommendation: recommend_for(transport_id).to_string(),
    })
}
