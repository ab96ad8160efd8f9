//! Regulatory fees per unit

use crate::schedule::{FeeSchedule, PermitFeeMode};
use serde::{Deserialize, Serialize};

/// Fees charged on a single unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// Unit is small enough for the impact fee waiver.
    ///
    /// Informational only: no impact fee is modeled, so the flag never
    /// changes a fee amount.
    pub impact_fee_waived: bool,
    pub school_fee: f64,
    pub water_sewer_fee: f64,
    pub permit_fee: f64,
}

impl FeeBreakdown {
    /// Calculate per-unit fees for an effective size
    pub fn calculate(effective_sqft: f64, schedule: &FeeSchedule) -> Self {
        let impact_fee_waived = effective_sqft <= schedule.impact_fee_waiver_threshold_sqft;

        let school_fee = if effective_sqft > schedule.school_fee_threshold_sqft {
            effective_sqft * schedule.school_fee_per_sqft
        } else {
            0.0
        };

        let water_sewer_fee = schedule.water_fee + schedule.sewer_fee;

        Self {
            impact_fee_waived,
            school_fee,
            water_sewer_fee,
            permit_fee: permit_fee(effective_sqft, schedule),
        }
    }

    /// Total fees for one unit
    pub fn total(&self) -> f64 {
        self.school_fee + self.water_sewer_fee + self.permit_fee
    }

    /// Same fees multiplied across `unit_count` units
    pub fn scaled(&self, unit_count: u32) -> Self {
        let n = unit_count as f64;
        Self {
            impact_fee_waived: self.impact_fee_waived,
            school_fee: self.school_fee * n,
            water_sewer_fee: self.water_sewer_fee * n,
            permit_fee: self.permit_fee * n,
        }
    }
}

/// Permit fee interpolated linearly between base and max over the size cap
pub fn permit_fee(effective_sqft: f64, schedule: &FeeSchedule) -> f64 {
    let mut factor = effective_sqft / schedule.permit_fee_size_cap;
    if factor > 1.0 {
        match schedule.permit_fee_mode {
            PermitFeeMode::Clamp => factor = 1.0,
            PermitFeeMode::Extrapolate => log::warn!(
                "Size {:.0} sq ft exceeds permit fee cap of {:.0} sq ft; extrapolating permit fee",
                effective_sqft,
                schedule.permit_fee_size_cap
            ),
        }
    }
    schedule.permit_fee_base + factor * (schedule.permit_fee_max - schedule.permit_fee_base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_impact_fee_waiver_boundary() {
        let schedule = FeeSchedule::san_diego_2025();
        assert!(FeeBreakdown::calculate(750.0, &schedule).impact_fee_waived);
        assert!(!FeeBreakdown::calculate(751.0, &schedule).impact_fee_waived);
    }

    #[test]
    fn test_school_fee_boundary() {
        let schedule = FeeSchedule::san_diego_2025();
        assert_eq!(FeeBreakdown::calculate(500.0, &schedule).school_fee, 0.0);
        assert_relative_eq!(
            FeeBreakdown::calculate(501.0, &schedule).school_fee,
            501.0 * 5.17,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_waiver_does_not_change_fees() {
        let schedule = FeeSchedule::san_diego_2025();
        let small = FeeBreakdown::calculate(700.0, &schedule);
        assert!(small.impact_fee_waived);
        assert_relative_eq!(
            small.total(),
            700.0 * 5.17 + 4101.0 + permit_fee(700.0, &schedule),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_water_sewer_flat() {
        let schedule = FeeSchedule::san_diego_2025();
        assert_eq!(FeeBreakdown::calculate(200.0, &schedule).water_sewer_fee, 4101.0);
        assert_eq!(FeeBreakdown::calculate(1200.0, &schedule).water_sewer_fee, 4101.0);
    }

    #[test]
    fn test_permit_fee_interpolation() {
        let schedule = FeeSchedule::san_diego_2025();
        assert_relative_eq!(permit_fee(0.0, &schedule), 6500.0);
        assert_relative_eq!(permit_fee(600.0, &schedule), 13750.0);
        assert_relative_eq!(permit_fee(1200.0, &schedule), 21000.0);
    }

    #[test]
    fn test_permit_fee_above_cap() {
        let mut schedule = FeeSchedule::san_diego_2025();
        // 1800 / 1200 = 1.5 => 6500 + 1.5 * 14500
        assert_relative_eq!(permit_fee(1800.0, &schedule), 28250.0);

        schedule.permit_fee_mode = PermitFeeMode::Clamp;
        assert_relative_eq!(permit_fee(1800.0, &schedule), 21000.0);
        assert_relative_eq!(permit_fee(600.0, &schedule), 13750.0);
    }

    #[test]
    fn test_scaled() {
        let schedule = FeeSchedule::san_diego_2025();
        let fees = FeeBreakdown::calculate(600.0, &schedule);
        let scaled = fees.scaled(3);
        assert_relative_eq!(scaled.total(), fees.total() * 3.0, max_relative = 1e-12);
        assert_eq!(scaled.impact_fee_waived, fees.impact_fee_waived);
    }
}
