//! Recommendation Engine
//!
//! Two strategies:
//! - per-trip advice keyed by transport kind (quick flow)
//! - category threshold advice over monthly totals (detailed flow)

use serde::{Deserialize, Serialize};

use super::factors::{ActivityKind, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub message: String,
}

impl Recommendation {
    fn new(category: &str, priority: Priority, message: &str) -> Self {
        Self {
            category: category.to_string(),
            priority,
            message: message.to_string(),
        }
    }
}

pub const GENERIC_TRIP_ADVICE: &str = "Considere alternativas mais sustentáveis.";

/// Advice for a single trip; unknown kinds get the generic message.
pub fn recommend_for(kind_id: &str) -> &'static str {
    match kind_id.parse::<ActivityKind>() {
        Ok(ActivityKind::Bus) => "✓ Ótima escolha! O ônibus é uma opção sustentável.",
        Ok(ActivityKind::Car) => "⚠️ Considere usar transporte público para reduzir emissões.",
        Ok(ActivityKind::Motorcycle) => "✓ Bom! Motos têm menor impacto que carros.",
        Ok(ActivityKind::Bicycle) => "✓ Excelente! Zero emissões!",
        Ok(ActivityKind::Flight) => "⚠️ Voos têm alto impacto. Considere alternativas quando possível.",
        Ok(ActivityKind::PublicTransport) => "✓ Ótima escolha! Transporte público é sustentável.",
        _ => GENERIC_TRIP_ADVICE,
    }
}

/// Monthly kg thresholds for one category. Strictly greater-than on both.
struct Threshold {
    category: Category,
    label: &'static str,
    high_above: f64,
    medium_above: f64,
    high_message: &'static str,
    medium_message: &'static str,
}

const THRESHOLDS: [Threshold; 3] = [
    Threshold {
        category: Category::Transport,
        label: "Transporte",
        high_above: 100.0,
        medium_above: 50.0,
        high_message: "Use transporte público, bicicleta ou carona compartilhada para reduzir emissões.",
        medium_message: "Aumente o uso de transporte público.",
    },
    Threshold {
        category: Category::Energy,
        label: "Energia",
        high_above: 75.0,
        medium_above: 50.0,
        high_message: "Instale painéis solares ou troque por energia renovável.",
        medium_message: "Reduza o consumo de eletricidade: use LED, desligue aparelhos em stand-by.",
    },
    Threshold {
        category: Category::Consumption,
        label: "Consumo",
        high_above: 270.0,
        medium_above: 100.0,
        high_message: "Reduza significativamente o consumo de carne vermelha ou torne-se vegetariano.",
        medium_message: "Diminua o consumo de carne vermelha ou escolha proteínas alternativas.",
    },
];

impl Threshold {
    fn evaluate(&self, monthly_kg: f64) -> Option<Recommendation> {
        if monthly_kg > self.high_above {
            Some(Recommendation::new(self.label, Priority::High, self.high_message))
        } else if monthly_kg > self.medium_above {
            Some(Recommendation::new(self.label, Priority::Medium, self.medium_message))
        } else {
            None
        }
    }
}

fn fallback() -> Vec<Recommendation> {
    vec![
        Recommendation::new("Geral", Priority::Low, "Continue mantendo suas emissões baixas!"),
        Recommendation::new("Geral", Priority::Low, "Plante árvores para compensar suas emissões."),
    ]
}

/// At most one recommendation per category, in transport, energy,
/// consumption order. Falls back to two general tips when nothing triggers.
pub fn recommend(transport_kg: f64, energy_kg: f64, consumption_kg: f64) -> Vec<Recommendation> {
    let monthly = |category: Category| match category {
        Category::Transport => transport_kg,
        Category::Energy => energy_kg,
        Category::Consumption => consumption_kg,
    };

    let recommendations: Vec<Recommendation> = THRESHOLDS
        .iter()
        .filter_map(|t| t.evaluate(monthly(t.category)))
        .collect();

    if recommendations.is_empty() {
        fallback()
    } else {
        recommendations
    }
}
