//! Emission Factor Table
//!
//! Static mapping from activity kind to kg CO2 per unit, grouped into the
//! three reporting categories. Built once at startup and only read afterwards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reporting category an activity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Energy,
    Consumption,
}

impl Category {
    /// Evaluation order used by aggregation, listing and recommendations
    pub const ALL: [Category; 3] = [Category::Transport, Category::Energy, Category::Consumption];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Energy => "energy",
            Self::Consumption => "consumption",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A measurable behaviour with an associated emission factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Bus,
    Car,
    Motorcycle,
    Bicycle,
    Flight,
    PublicTransport,
    Electricity,
    NaturalGas,
    MeatConsumption,
    Waste,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 10] = [
        ActivityKind::Bus,
        ActivityKind::Car,
        ActivityKind::Motorcycle,
        ActivityKind::Bicycle,
        ActivityKind::Flight,
        ActivityKind::PublicTransport,
        ActivityKind::Electricity,
        ActivityKind::NaturalGas,
        ActivityKind::MeatConsumption,
        ActivityKind::Waste,
    ];

    /// Wire identifier, as used in request bodies and the factor catalog
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bus => "bus",
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Bicycle => "bicycle",
            Self::Flight => "flight",
            Self::PublicTransport => "publicTransport",
            Self::Electricity => "electricity",
            Self::NaturalGas => "naturalGas",
            Self::MeatConsumption => "meatConsumption",
            Self::Waste => "waste",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Bus
            | Self::Car
            | Self::Motorcycle
            | Self::Bicycle
            | Self::Flight
            | Self::PublicTransport => Category::Transport,
            Self::Electricity | Self::NaturalGas => Category::Energy,
            Self::MeatConsumption | Self::Waste => Category::Consumption,
        }
    }

    /// Unit the factor is expressed in
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Electricity => "kg CO2/kWh",
            Self::NaturalGas => "kg CO2/m³",
            Self::MeatConsumption | Self::Waste => "kg CO2/kg",
            _ => "kg CO2/km",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.id() == s).ok_or(())
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// kg CO2 produced per unit of one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub kind: ActivityKind,
    pub per_unit_kg: f64,
    pub label: String,
    pub category: Category,
}

impl EmissionFactor {
    fn new(kind: ActivityKind, per_unit_kg: f64, label: &str) -> Self {
        Self {
            kind,
            per_unit_kg,
            label: label.to_string(),
            category: kind.category(),
        }
    }

    pub fn unit(&self) -> &'static str {
        self.kind.unit()
    }
}

/// Immutable lookup table, one entry per `ActivityKind`
#[derive(Debug, Clone)]
pub struct FactorTable {
    entries: Vec<EmissionFactor>,
}

impl FactorTable {
    /// The standard factor set
    pub fn standard() -> Self {
        use ActivityKind::*;
        Self {
            entries: vec![
                EmissionFactor::new(Bus, 0.04, "Ônibus"),
                EmissionFactor::new(Car, 0.12, "Carro"),
                EmissionFactor::new(Motorcycle, 0.08, "Moto"),
                EmissionFactor::new(Bicycle, 0.0, "Bicicleta"),
                EmissionFactor::new(Flight, 0.255, "Voo (por hora)"),
                EmissionFactor::new(PublicTransport, 0.04, "Transporte Público"),
                EmissionFactor::new(Electricity, 0.5, "Eletricidade (kWh)"),
                EmissionFactor::new(NaturalGas, 2.0, "Gás Natural (m³)"),
                EmissionFactor::new(MeatConsumption, 27.0, "Carne Vermelha (kg)"),
                EmissionFactor::new(Waste, 0.5, "Resíduos (kg)"),
            ],
        }
    }

    pub fn lookup(&self, kind: ActivityKind) -> Option<&EmissionFactor> {
        self.entries.iter().find(|f| f.kind == kind)
    }

    /// Resolve a wire identifier; unknown ids are `None`
    pub fn lookup_id(&self, id: &str) -> Option<&EmissionFactor> {
        id.parse::<ActivityKind>().ok().and_then(|k| self.lookup(k))
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &EmissionFactor> {
        self.entries.iter().filter(move |f| f.category == category)
    }

    /// Wire ids of every kind in `category`, in table order
    pub fn kinds_in(&self, category: Category) -> Vec<String> {
        self.in_category(category).map(|f| f.kind.id().to_string()).collect()
    }

    /// Every factor, grouped by category in evaluation order
    pub fn list_all(&self) -> Vec<&EmissionFactor> {
        Category::ALL
            .iter()
            .flat_map(|c| self.in_category(*c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_one_factor() {
        let table = FactorTable::standard();
        assert_eq!(table.len(), ActivityKind::ALL.len());
        for kind in ActivityKind::ALL {
            let factor = table.lookup(kind).unwrap();
            assert_eq!(factor.category, kind.category());
            assert!(factor.per_unit_kg >= 0.0);
        }
    }

    #[test]
    fn test_lookup_id() {
        let table = FactorTable::standard();
        assert_eq!(table.lookup_id("car").unwrap().per_unit_kg, 0.12);
        assert_eq!(table.lookup_id("publicTransport").unwrap().label, "Transporte Público");
        assert!(table.lookup_id("teleporter").is_none());
        assert!(table.lookup_id("Car").is_none());
    }

    #[test]
    fn test_units() {
        assert_eq!(ActivityKind::Flight.unit(), "kg CO2/km");
        assert_eq!(ActivityKind::Electricity.unit(), "kg CO2/kWh");
        assert_eq!(ActivityKind::NaturalGas.unit(), "kg CO2/m³");
        assert_eq!(ActivityKind::Waste.unit(), "kg CO2/kg");
    }

    #[test]
    fn test_list_all_is_grouped() {
        let table = FactorTable::standard();
        let categories: Vec<Category> = table.list_all().iter().map(|f| f.category).collect();
        let mut sorted = categories.clone();
        sorted.sort_by_key(|c| Category::ALL.iter().position(|x| x == c));
        assert_eq!(categories, sorted);
        assert_eq!(table.kinds_in(Category::Energy), vec!["electricity", "naturalGas"]);
    }
}
