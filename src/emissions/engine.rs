//! Estimation Engine
//!
//! Owns the factor table, reference averages and quick-flow basis, and
//! exposes every estimation operation behind one shareable value.

use super::averages::{AveragesReport, ReferenceAverages};
use super::catalog::EmissionFactorCatalog;
use super::detailed::{estimate_detailed, DetailedRequest, DetailedResult};
use super::error::EstimateResult;
use super::factors::FactorTable;
use super::quick::{estimate_quick, QuickComparisonBasis, QuickRequest, QuickResult};

/// Stateless estimation engine.
///
/// Holds the immutable factor table and reference averages; every call reads
/// them and its own input only, so one instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct CarbonEngine {
    factors: FactorTable,
    averages: ReferenceAverages,
    quick_basis: QuickComparisonBasis,
}

impl CarbonEngine {
    pub fn new(factors: FactorTable, averages: ReferenceAverages) -> Self {
        Self {
            factors,
            averages,
            quick_basis: QuickComparisonBasis::default(),
        }
    }

    pub fn with_quick_basis(mut self, basis: QuickComparisonBasis) -> Self {
        self.quick_basis = basis;
        self
    }

    pub fn factors(&self) -> &FactorTable {
        &self.factors
    }

    pub fn reference_averages(&self) -> &ReferenceAverages {
        &self.averages
    }

    pub fn quick_basis(&self) -> QuickComparisonBasis {
        self.quick_basis
    }

    pub fn calculate_quick(&self, request: &QuickRequest) -> EstimateResult<QuickResult> {
        estimate_quick(&self.factors, &self.averages, self.quick_basis, request)
    }

    pub fn calculate_detailed(&self, request: &DetailedRequest) -> DetailedResult {
        estimate_detailed(&self.factors, &self.averages, request)
    }

    pub fn list_emission_factors(&self) -> EmissionFactorCatalog {
        EmissionFactorCatalog::from_table(&self.factors)
    }

    pub fn averages(&self) -> AveragesReport {
        self.averages.report()
    }
}

impl Default for CarbonEngine {
    fn default() -> Self {
        Self::new(FactorTable::standard(), ReferenceAverages::default())
    }
}
