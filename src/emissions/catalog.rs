//! Factor catalog, the introspection view over the factor table.

use serde::{Deserialize, Serialize};

use super::factors::{Category, EmissionFactor, FactorTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorEntry {
    pub id: String,
    pub label: String,
    pub factor: f64,
    pub unit: String,
}

impl From<&EmissionFactor> for FactorEntry {
    fn from(f: &EmissionFactor) -> Self {
        Self {
            id: f.kind.id().to_string(),
            label: f.label.clone(),
            factor: f.per_unit_kg,
            unit: f.unit().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactorCatalog {
    pub transport: Vec<FactorEntry>,
    pub energy: Vec<FactorEntry>,
    pub consumption: Vec<FactorEntry>,
}

impl EmissionFactorCatalog {
    pub fn from_table(table: &FactorTable) -> Self {
        let entries = |c: Category| -> Vec<FactorEntry> { table.in_category(c).map(FactorEntry::from).collect() };
        Self {
            transport: entries(Category::Transport),
            energy: entries(Category::Energy),
            consumption: entries(Category::Consumption),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactorEntry> {
        self.transport.iter().chain(&self.energy).chain(&self.consumption)
    }
}
