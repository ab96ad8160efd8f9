//! Construction and total project cost

use super::fees::FeeBreakdown;
use serde::{Deserialize, Serialize};

/// Up-front cost of building every unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCosts {
    pub unit_count: u32,
    pub construction_cost_per_unit: f64,
    pub fees_per_unit: FeeBreakdown,
    pub construction_cost: f64,
    pub total_fees: f64,
    pub total_project_cost: f64,
}

impl ProjectCosts {
    pub fn calculate(
        effective_sqft: f64,
        cost_per_sqft: f64,
        fees_per_unit: FeeBreakdown,
        unit_count: u32,
    ) -> Self {
        let n = unit_count as f64;
        let construction_cost_per_unit = effective_sqft * cost_per_sqft;
        let construction_cost = construction_cost_per_unit * n;
        let total_fees = fees_per_unit.total() * n;

        Self {
            unit_count,
            construction_cost_per_unit,
            fees_per_unit,
            construction_cost,
            total_fees,
            total_project_cost: construction_cost + total_fees,
        }
    }

    /// Fees across all units, by category
    pub fn total_fee_breakdown(&self) -> FeeBreakdown {
        self.fees_per_unit.scaled(self.unit_count)
    }
}
