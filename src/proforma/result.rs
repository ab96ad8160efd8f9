//! Proforma output structures

use super::expenses::MonthlyExpenses;
use super::fees::FeeBreakdown;
use super::metrics::{CostBreakdownItem, Payback};
use super::projection::ProjectionYear;
use crate::input::UnitType;
use serde::{Deserialize, Serialize};

/// Complete proforma for one set of inputs
///
/// Totals cover all units; `*_per_unit` fields cover one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProformaResult {
    pub unit_type: UnitType,
    pub unit_count: u32,

    // Size and up-front cost
    pub effective_size_sqft: f64,
    pub impact_fee_waived: bool,
    pub construction_cost_per_unit: f64,
    pub fees_per_unit: FeeBreakdown,
    pub construction_cost: f64,
    pub total_fees: f64,
    pub total_project_cost: f64,

    // Financing
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_mortgage: f64,

    // Operations (year 1)
    pub total_monthly_rent: f64,
    pub effective_monthly_rent: f64,
    pub monthly_expenses: MonthlyExpenses,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,

    // Returns
    pub cash_on_cash_return_pct: f64,
    pub payback: Payback,

    // Chart datasets
    pub cost_breakdown: Vec<CostBreakdownItem>,
    pub cash_flow_projection: Vec<ProjectionYear>,
}

impl ProformaResult {
    /// First projection year in which cumulative cash flow turns non-negative
    pub fn break_even_year(&self) -> Option<u32> {
        self.cash_flow_projection
            .iter()
            .find(|row| row.cumulative_cash_flow >= 0.0)
            .map(|row| row.year)
    }

    /// Cumulative cash flow at the end of the horizon
    pub fn final_cumulative_cash_flow(&self) -> f64 {
        self.cash_flow_projection
            .last()
            .map(|row| row.cumulative_cash_flow)
            .unwrap_or(-self.down_payment)
    }

    /// Sum of projected annual cash flows, excluding the down payment
    pub fn total_projected_cash_flow(&self) -> f64 {
        self.cash_flow_projection.iter().map(|row| row.annual_cash_flow).sum()
    }
}
