//! Proforma engine: size, fees, financing, operations, projection, metrics

use super::costs::ProjectCosts;
use super::expenses::{FixedMonthlyCosts, OperatingCashFlow};
use super::fees::FeeBreakdown;
use super::financing::Financing;
use super::metrics::{cash_on_cash_return_pct, cost_breakdown, payback};
use super::projection::CashFlowProjector;
use super::result::ProformaResult;
use super::size::resolve_size;
use crate::error::Result;
use crate::input::ProformaInput;
use crate::schedule::FeeSchedule;

/// Compute a proforma against a fee schedule
pub fn compute_proforma(input: &ProformaInput, schedule: &FeeSchedule) -> Result<ProformaResult> {
    ProformaEngine::new(schedule.clone()).compute(input)
}

/// Proforma engine bound to one jurisdiction's fee schedule
#[derive(Debug, Clone, Default)]
pub struct ProformaEngine {
    schedule: FeeSchedule,
}

impl ProformaEngine {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Compute the full proforma for one input.
    ///
    /// Fails on an invalid schedule or input without producing a partial
    /// result. The computation itself is pure; equal inputs give equal results.
    pub fn compute(&self, input: &ProformaInput) -> Result<ProformaResult> {
        self.schedule.validate()?;
        input.validate()?;
        self.warn_if_outside_limits(input);

        let schedule = &self.schedule;
        let effective_size_sqft = resolve_size(input.nominal_size_sqft, input.unit_type, schedule)?;

        // Up-front cost
        let fees_per_unit = FeeBreakdown::calculate(effective_size_sqft, schedule);
        let costs = ProjectCosts::calculate(
            effective_size_sqft,
            input.cost_per_sqft,
            fees_per_unit,
            input.unit_count,
        );

        let financing = Financing::calculate(
            costs.total_project_cost,
            input.down_payment_pct,
            input.interest_rate_pct,
            input.loan_term_years,
        );

        // Year-1 operations
        let fixed = FixedMonthlyCosts::calculate(
            financing.monthly_payment,
            costs.total_project_cost,
            input.property_tax_rate_pct,
            input.insurance_annual,
            input.unit_count,
        );
        let total_monthly_rent = input.monthly_rent * input.unit_count as f64;
        let operations = OperatingCashFlow::at_rent(
            &fixed,
            total_monthly_rent,
            input.maintenance_pct,
            input.vacancy_pct,
        );
        let monthly_cash_flow = operations.monthly_cash_flow;
        let annual_cash_flow = operations.annual_cash_flow();

        let projection = CashFlowProjector {
            fixed,
            starting_rent: total_monthly_rent,
            down_payment: financing.down_payment,
            annual_rent_increase_pct: input.annual_rent_increase_pct,
            maintenance_pct: input.maintenance_pct,
            vacancy_pct: input.vacancy_pct,
        }
        .project();

        log::debug!(
            "Proforma {} x{} @ {:.0} sq ft: project cost {:.2}, monthly cash flow {:.2}",
            input.unit_type,
            input.unit_count,
            effective_size_sqft,
            costs.total_project_cost,
            monthly_cash_flow
        );

        Ok(ProformaResult {
            unit_type: input.unit_type,
            unit_count: input.unit_count,
            effective_size_sqft,
            impact_fee_waived: fees_per_unit.impact_fee_waived,
            construction_cost_per_unit: costs.construction_cost_per_unit,
            fees_per_unit,
            construction_cost: costs.construction_cost,
            total_fees: costs.total_fees,
            total_project_cost: costs.total_project_cost,
            down_payment: financing.down_payment,
            loan_amount: financing.loan_amount,
            monthly_mortgage: financing.monthly_payment,
            total_monthly_rent,
            effective_monthly_rent: operations.effective_rent,
            monthly_expenses: operations.expenses,
            monthly_cash_flow,
            annual_cash_flow,
            cash_on_cash_return_pct: cash_on_cash_return_pct(annual_cash_flow, financing.down_payment),
            payback: payback(monthly_cash_flow, annual_cash_flow, financing.down_payment),
            cost_breakdown: cost_breakdown(&costs),
            cash_flow_projection: projection,
        })
    }

    fn warn_if_outside_limits(&self, input: &ProformaInput) {
        let (min, max) = self.schedule.size_range(input.unit_type);
        if input.nominal_size_sqft < min || input.nominal_size_sqft > max {
            log::warn!(
                "{} size {:.0} sq ft is outside the {} range of {:.0}-{:.0} sq ft",
                input.unit_type.label(),
                input.nominal_size_sqft,
                self.schedule.name,
                min,
                max
            );
        }
    }
}
