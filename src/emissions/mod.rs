//! Emissions Module
//!
//! Pure estimation core: factor table, aggregation, classification,
//! comparison against reference averages and recommendations, wired into
//! the quick (single trip) and detailed (monthly household) flows.

pub mod factors;
pub mod averages;
pub mod aggregate;
pub mod classify;
pub mod compare;
pub mod recommend;
pub mod quick;
pub mod detailed;
pub mod catalog;
mod engine;
mod error;

pub use factors::{ActivityKind, Category, EmissionFactor, FactorTable};
pub use averages::{AveragesReport, ReferenceAverages};
pub use aggregate::{aggregate, ActivityQuantities};
pub use classify::{classify, EmissionClass};
pub use compare::{compare, ComparisonResult, ComparisonStatus};
pub use recommend::{recommend, recommend_for, Priority, Recommendation};
pub use quick::{QuickComparisonBasis, QuickRequest, QuickResult};
pub use detailed::{DetailedRequest, DetailedResult};
pub use catalog::{EmissionFactorCatalog, FactorEntry};
pub use engine::CarbonEngine;
pub use error::{ErrorKind, EstimateError, EstimateResult};
