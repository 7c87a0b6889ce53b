//! Category Aggregator
//!
//! Sums weighted emissions for one category. Unknown ids, ids from another
//! category and non-positive quantities contribute nothing and are not errors.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use super::factors::{Category, FactorTable};

/// Ceiling for one category's total. Three categories scaled to a year and
/// compared against the averages stay finite below it.
pub const MAX_CATEGORY_KG: f64 = f64::MAX / 64.0;

/// Activity id to quantity, as supplied by a caller.
///
/// Deserializes leniently from any JSON object: numbers are kept, numeric
/// strings are parsed, anything else is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityQuantities(BTreeMap<String, f64>);

impl ActivityQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, quantity: f64) -> Self {
        self.0.insert(id.into(), quantity);
        self
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.0.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ActivityQuantities {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn quantity_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for ActivityQuantities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let map = match raw {
            Some(Value::Object(obj)) => obj
                .iter()
                .filter_map(|(k, v)| quantity_from_value(v).map(|q| (k.clone(), q)))
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(Self(map))
    }
}

/// Total kg CO2 for `category` over whatever period the quantities describe,
/// saturating at [`MAX_CATEGORY_KG`].
pub fn aggregate(table: &FactorTable, category: Category, quantities: &ActivityQuantities) -> f64 {
    let mut total: f64 = 0.0;
    for (id, quantity) in quantities.iter() {
        match table.lookup_id(id) {
            Some(factor) if factor.category == category && quantity > 0.0 => {
                let product = quantity * factor.per_unit_kg;
                // inf × 0 from a zero-factor kind
                if product.is_nan() {
                    debug!(%category, id, quantity, "skipping undefined product");
                    continue;
                }
                total = (total + product).min(MAX_CATEGORY_KG);
            }
            _ => debug!(%category, id, quantity, "skipping activity quantity"),
        }
    }
    total
}
