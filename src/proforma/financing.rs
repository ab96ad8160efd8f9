//! Loan sizing and fixed-rate amortization

use serde::{Deserialize, Serialize};

/// Down payment and loan terms for a project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financing {
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub num_payments: u32,
    pub monthly_payment: f64,
}

impl Financing {
    /// Finance `total_project_cost` with a single fixed-rate fully-amortizing loan
    pub fn calculate(
        total_project_cost: f64,
        down_payment_pct: f64,
        interest_rate_pct: f64,
        loan_term_years: u32,
    ) -> Self {
        let down_payment = total_project_cost * down_payment_pct / 100.0;
        let loan_amount = total_project_cost - down_payment;
        let monthly_rate = interest_rate_pct / 100.0 / 12.0;
        let num_payments = loan_term_years.saturating_mul(12);

        Self {
            down_payment,
            loan_amount,
            monthly_rate,
            num_payments,
            monthly_payment: monthly_payment(loan_amount, monthly_rate, num_payments),
        }
    }

    /// Total interest paid over the life of the loan
    pub fn total_interest(&self) -> f64 {
        self.monthly_payment * self.num_payments as f64 - self.loan_amount
    }
}

/// Level monthly payment that retires `principal` in `num_payments` months.
///
/// Growth `(1 + r)^n - 1` is taken through `ln_1p`/`exp_m1` so rates too small
/// to move `1 + r` still amortize. A rate that leaves no growth falls back to
/// straight-line; growth past f64 range leaves only the interest term.
pub fn monthly_payment(principal: f64, monthly_rate: f64, num_payments: u32) -> f64 {
    if principal <= 0.0 || num_payments == 0 {
        return 0.0;
    }

    let n = num_payments as f64;
    let growth = (n * monthly_rate.ln_1p()).exp_m1();
    if monthly_rate <= 0.0 || growth <= 0.0 || growth.is_nan() {
        return principal / n;
    }
    if growth.is_infinite() {
        return principal * monthly_rate;
    }

    principal * monthly_rate * (growth + 1.0) / growth
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_interest_straight_line() {
        let payment = monthly_payment(360_000.0, 0.0, 360);
        assert_eq!(payment, 1000.0);
        assert!(payment.is_finite());
    }

    #[test]
    fn test_standard_amortization() {
        // $200k at 6% for 30 years is the textbook $1,199.10
        let payment = monthly_payment(200_000.0, 0.06 / 12.0, 360);
        assert_relative_eq!(payment, 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_no_loan_no_payment() {
        assert_eq!(monthly_payment(0.0, 0.07 / 12.0, 360), 0.0);

        let financing = Financing::calculate(250_000.0, 100.0, 7.0, 30);
        assert_eq!(financing.loan_amount, 0.0);
        assert_eq!(financing.monthly_payment, 0.0);
    }

    #[test]
    fn test_financing_split() {
        let financing = Financing::calculate(300_000.0, 20.0, 0.0, 30);
        assert_eq!(financing.down_payment, 60_000.0);
        assert_eq!(financing.loan_amount, 240_000.0);
        assert_eq!(financing.num_payments, 360);
        assert_relative_eq!(financing.monthly_payment, 240_000.0 / 360.0);
        assert_relative_eq!(financing.total_interest(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_payment_retires_principal() {
        let r = 0.07 / 12.0;
        let payment = monthly_payment(150_000.0, r, 180);
        let mut balance = 150_000.0;
        for _ in 0..180 {
            balance = balance * (1.0 + r) - payment;
        }
        assert!(balance.abs() < 1e-4);
    }

    #[test]
    fn test_tiny_rate_stays_finite() {
        // 1e-15% a year does not change 1 + r in f64
        let r = 1e-15 / 100.0 / 12.0;
        assert_eq!(1.0 + r, 1.0);

        let payment = monthly_payment(360_000.0, r, 360);
        assert!(payment.is_finite());
        assert_relative_eq!(payment, 1000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_very_long_term_does_not_overflow() {
        let financing = Financing::calculate(230_953.0, 20.0, 7.0, 400_000_000);
        assert_eq!(financing.num_payments, u32::MAX);
        assert!(financing.monthly_payment.is_finite());
        // Interest-only in the limit, never negative
        assert_relative_eq!(
            financing.monthly_payment,
            financing.loan_amount * financing.monthly_rate,
            max_relative = 1e-9
        );

        // Past i32::MAX payments
        let payment = monthly_payment(184_762.4, 0.07 / 12.0, 2_400_000_000);
        assert!(payment > 0.0);
    }
}
