//! Investment return metrics and chart breakdowns

use super::costs::ProjectCosts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Paybacks at or beyond this many years are shown as "N/A"
pub const PAYBACK_DISPLAY_LIMIT_YEARS: f64 = 100.0;

/// Time to recover the down payment from operating cash flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    Years(f64),
    /// Cash flow is zero or negative; the investment never pays back
    Never,
}

impl Payback {
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years(years) => Some(*years),
            Payback::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Payback::Never)
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Years(years) if *years < PAYBACK_DISPLAY_LIMIT_YEARS => {
                write!(f, "{:.1} yrs", years)
            }
            _ => f.write_str("N/A"),
        }
    }
}

/// Annual cash flow as a percentage of cash invested
pub fn cash_on_cash_return_pct(annual_cash_flow: f64, down_payment: f64) -> f64 {
    if down_payment > 0.0 {
        annual_cash_flow / down_payment * 100.0
    } else {
        0.0
    }
}

pub fn payback(monthly_cash_flow: f64, annual_cash_flow: f64, down_payment: f64) -> Payback {
    if monthly_cash_flow > 0.0 {
        Payback::Years(down_payment / annual_cash_flow)
    } else {
        Payback::Never
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Construction,
    Permits,
    WaterSewer,
    SchoolFees,
}

impl CostCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Construction => "Construction",
            CostCategory::Permits => "Permits",
            CostCategory::WaterSewer => "Water/Sewer",
            CostCategory::SchoolFees => "School Fees",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownItem {
    pub category: CostCategory,
    pub amount: f64,
}

/// Project cost split for charting, always in construction, permits,
/// water/sewer, school fees order
pub fn cost_breakdown(costs: &ProjectCosts) -> Vec<CostBreakdownItem> {
    let fees = costs.total_fee_breakdown();
    vec![
        CostBreakdownItem { category: CostCategory::Construction, amount: costs.construction_cost },
        CostBreakdownItem { category: CostCategory::Permits, amount: fees.permit_fee },
        CostBreakdownItem { category: CostCategory::WaterSewer, amount: fees.water_sewer_fee },
        CostBreakdownItem { category: CostCategory::SchoolFees, amount: fees.school_fee },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proforma::fees::FeeBreakdown;
    use crate::schedule::FeeSchedule;
    use approx::assert_relative_eq;

    #[test]
    fn test_cash_on_cash() {
        assert_relative_eq!(cash_on_cash_return_pct(5_000.0, 50_000.0), 10.0);
        assert_relative_eq!(cash_on_cash_return_pct(-2_500.0, 50_000.0), -5.0);
        assert_eq!(cash_on_cash_return_pct(5_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_payback() {
        assert_eq!(payback(500.0, 6_000.0, 60_000.0), Payback::Years(10.0));
        assert_eq!(payback(0.0, 0.0, 60_000.0), Payback::Never);
        assert_eq!(payback(-10.0, -120.0, 60_000.0), Payback::Never);
        assert_eq!(payback(100.0, 1_200.0, 0.0), Payback::Years(0.0));
    }

    #[test]
    fn test_payback_display() {
        assert_eq!(Payback::Years(12.34).to_string(), "12.3 yrs");
        assert_eq!(Payback::Years(150.0).to_string(), "N/A");
        assert_eq!(Payback::Never.to_string(), "N/A");
        assert_eq!(Payback::Never.years(), None);
    }

    #[test]
    fn test_cost_breakdown_order_and_scaling() {
        let schedule = FeeSchedule::san_diego_2025();
        let fees = FeeBreakdown::calculate(600.0, &schedule);
        let costs = ProjectCosts::calculate(600.0, 350.0, fees, 2);
        let breakdown = cost_breakdown(&costs);

        let categories: Vec<_> = breakdown.iter().map(|item| item.category).collect();
        assert_eq!(
            categories,
            vec![
                CostCategory::Construction,
                CostCategory::Permits,
                CostCategory::WaterSewer,
                CostCategory::SchoolFees,
            ]
        );
        assert_eq!(breakdown[0].amount, 420_000.0);
        assert_relative_eq!(breakdown[1].amount, 27_500.0);
        assert_relative_eq!(breakdown[2].amount, 8_202.0);
        assert_relative_eq!(breakdown[3].amount, 6_204.0, max_relative = 1e-12);

        let sum: f64 = breakdown.iter().map(|item| item.amount).sum();
        assert_relative_eq!(sum, costs.total_project_cost, max_relative = 1e-12);
    }
}
