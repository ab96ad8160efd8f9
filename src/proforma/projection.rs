//! Ten-year cash flow projection with annual rent escalation

use super::expenses::{FixedMonthlyCosts, OperatingCashFlow};
use serde::{Deserialize, Serialize};

/// Length of the projection horizon
pub const PROJECTION_YEARS: u32 = 10;

/// One year of projected cash flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Gross monthly rent across all units for this year
    pub monthly_rent: f64,

    pub annual_cash_flow: f64,

    /// Running total starting from the negative down payment
    pub cumulative_cash_flow: f64,
}

/// State carried between projection years
#[derive(Debug, Clone)]
pub struct ProjectorState {
    /// Current projection year (0 before the first year)
    pub year: u32,

    /// Gross monthly rent in force for the current year
    pub projected_rent: f64,

    /// Cumulative cash flow including the initial outlay
    pub cumulative: f64,
}

impl ProjectorState {
    pub fn initial(starting_rent: f64, down_payment: f64) -> Self {
        Self {
            year: 0,
            projected_rent: starting_rent,
            cumulative: -down_payment,
        }
    }

    /// Advance to next year, escalating rent from year 2 onward
    pub fn advance_year(&mut self, escalation_factor: f64) {
        self.year += 1;
        if self.year > 1 {
            self.projected_rent *= escalation_factor;
        }
    }
}

/// Projects cash flow forward with rent growth.
///
/// Mortgage, property tax and insurance stay at their year-1 level for the
/// whole horizon; only rent and the rent-driven expenses (maintenance,
/// vacancy) grow.
#[derive(Debug, Clone)]
pub struct CashFlowProjector {
    pub fixed: FixedMonthlyCosts,
    pub starting_rent: f64,
    pub down_payment: f64,
    pub annual_rent_increase_pct: f64,
    pub maintenance_pct: f64,
    pub vacancy_pct: f64,
}

impl CashFlowProjector {
    pub fn project(&self) -> Vec<ProjectionYear> {
        let escalation_factor = 1.0 + self.annual_rent_increase_pct / 100.0;
        let mut state = ProjectorState::initial(self.starting_rent, self.down_payment);
        let mut years = Vec::with_capacity(PROJECTION_YEARS as usize);

        for _ in 0..PROJECTION_YEARS {
            state.advance_year(escalation_factor);

            let flow = OperatingCashFlow::at_rent(
                &self.fixed,
                state.projected_rent,
                self.maintenance_pct,
                self.vacancy_pct,
            );
            let annual_cash_flow = flow.annual_cash_flow();
            state.cumulative += annual_cash_flow;

            years.push(ProjectionYear {
                year: state.year,
                monthly_rent: state.projected_rent,
                annual_cash_flow,
                cumulative_cash_flow: state.cumulative,
            });
        }

        years
    }
}
