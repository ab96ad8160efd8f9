//! Recurring monthly expenses and operating cash flow

use serde::{Deserialize, Serialize};

/// Costs that do not move with rent: held flat across the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedMonthlyCosts {
    pub mortgage: f64,
    pub property_tax: f64,
    pub insurance: f64,
}

impl FixedMonthlyCosts {
    pub fn calculate(
        monthly_mortgage: f64,
        total_project_cost: f64,
        property_tax_rate_pct: f64,
        insurance_annual_per_unit: f64,
        unit_count: u32,
    ) -> Self {
        Self {
            mortgage: monthly_mortgage,
            property_tax: total_project_cost * property_tax_rate_pct / 100.0 / 12.0,
            insurance: insurance_annual_per_unit * unit_count as f64 / 12.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.mortgage + self.property_tax + self.insurance
    }
}

/// One month of expenses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenses {
    pub mortgage: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub vacancy: f64,
    pub total: f64,
}

/// Rent, expenses and net cash flow for one month at a given gross rent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingCashFlow {
    pub gross_rent: f64,
    pub effective_rent: f64,
    pub expenses: MonthlyExpenses,
    pub monthly_cash_flow: f64,
}

impl OperatingCashFlow {
    /// Maintenance and vacancy are charged on gross rent.
    ///
    /// Vacancy is deducted twice: once from effective rent and again as an
    /// expense line. The dashboard figures depend on this.
    pub fn at_rent(
        fixed: &FixedMonthlyCosts,
        gross_rent: f64,
        maintenance_pct: f64,
        vacancy_pct: f64,
    ) -> Self {
        let maintenance = gross_rent * maintenance_pct / 100.0;
        let vacancy = gross_rent * vacancy_pct / 100.0;
        let total = fixed.total() + maintenance + vacancy;
        let effective_rent = gross_rent * (1.0 - vacancy_pct / 100.0);

        Self {
            gross_rent,
            effective_rent,
            expenses: MonthlyExpenses {
                mortgage: fixed.mortgage,
                property_tax: fixed.property_tax,
                insurance: fixed.insurance,
                maintenance,
                vacancy,
                total,
            },
            monthly_cash_flow: effective_rent - total,
        }
    }

    pub fn annual_cash_flow(&self) -> f64 {
        self.monthly_cash_flow * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixed() -> FixedMonthlyCosts {
        FixedMonthlyCosts::calculate(1000.0, 240_000.0, 1.0, 1200.0, 2)
    }

    #[test]
    fn test_fixed_costs() {
        let fixed = fixed();
        assert_eq!(fixed.mortgage, 1000.0);
        assert_relative_eq!(fixed.property_tax, 200.0);
        assert_relative_eq!(fixed.insurance, 200.0);
        assert_relative_eq!(fixed.total(), 1400.0);
    }

    #[test]
    fn test_operating_cash_flow() {
        let flow = OperatingCashFlow::at_rent(&fixed(), 4000.0, 5.0, 10.0);

        assert_relative_eq!(flow.expenses.maintenance, 200.0);
        assert_relative_eq!(flow.expenses.vacancy, 400.0);
        assert_relative_eq!(flow.expenses.total, 2000.0);
        assert_relative_eq!(flow.effective_rent, 3600.0);
        assert_relative_eq!(flow.monthly_cash_flow, 1600.0);
        assert_relative_eq!(flow.annual_cash_flow(), 19_200.0);
    }

    #[test]
    fn test_negative_cash_flow_allowed() {
        let flow = OperatingCashFlow::at_rent(&fixed(), 1000.0, 5.0, 5.0);
        assert!(flow.monthly_cash_flow < 0.0);
    }
}
