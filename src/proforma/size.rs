//! Effective unit size resolution

use crate::error::{ProformaError, Result};
use crate::input::UnitType;
use crate::schedule::FeeSchedule;

/// Resolve the size fees and construction are charged on.
///
/// Junior ADUs are clamped to the schedule's JADU maximum; every other type
/// is built at its nominal size.
pub fn resolve_size(nominal_sqft: f64, unit_type: UnitType, schedule: &FeeSchedule) -> Result<f64> {
    if !nominal_sqft.is_finite() || nominal_sqft <= 0.0 {
        return Err(ProformaError::validation(
            "nominal_size_sqft",
            format!("must be positive, got {}", nominal_sqft),
        ));
    }

    Ok(match unit_type {
        UnitType::Jadu => nominal_sqft.min(schedule.jadu_max_size_sqft),
        _ => nominal_sqft,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jadu_clamped() {
        let schedule = FeeSchedule::san_diego_2025();
        assert_eq!(resolve_size(800.0, UnitType::Jadu, &schedule).unwrap(), 500.0);
        assert_eq!(resolve_size(420.0, UnitType::Jadu, &schedule).unwrap(), 420.0);
    }

    #[test]
    fn test_other_types_unchanged() {
        let schedule = FeeSchedule::san_diego_2025();
        for unit_type in [UnitType::Detached, UnitType::Attached, UnitType::Conversion] {
            assert_eq!(resolve_size(800.0, unit_type, &schedule).unwrap(), 800.0);
        }
    }

    #[test]
    fn test_non_positive_rejected() {
        let schedule = FeeSchedule::san_diego_2025();
        assert!(resolve_size(0.0, UnitType::Detached, &schedule).is_err());
        assert!(resolve_size(-10.0, UnitType::Jadu, &schedule).is_err());
    }
}
