//! Proforma input parameters and unit types

use crate::error::{ProformaError, Result};
use crate::schedule::FeeSchedule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of accessory dwelling unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Standalone unit in the backyard
    #[default]
    Detached,
    /// Connected to the main house
    Attached,
    /// Converted garage
    Conversion,
    /// Junior ADU, size-capped, within the home
    Jadu,
}

impl UnitType {
    pub const ALL: [UnitType; 4] = [
        UnitType::Detached,
        UnitType::Attached,
        UnitType::Conversion,
        UnitType::Jadu,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            UnitType::Detached => "detached",
            UnitType::Attached => "attached",
            UnitType::Conversion => "conversion",
            UnitType::Jadu => "jadu",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitType::Detached => "Detached ADU",
            UnitType::Attached => "Attached ADU",
            UnitType::Conversion => "Garage Conversion",
            UnitType::Jadu => "Junior ADU",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UnitType::Detached => "Standalone unit in backyard",
            UnitType::Attached => "Connected to main house",
            UnitType::Conversion => "Convert existing garage",
            UnitType::Jadu => "Up to 500 sq ft, within home",
        }
    }

    /// Largest size this unit type may have under a schedule
    pub fn max_size_sqft(&self, schedule: &FeeSchedule) -> f64 {
        schedule.size_range(*self).1
    }
}

impl FromStr for UnitType {
    type Err = ProformaError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        UnitType::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ProformaError::UnknownUnitType(s.to_string()))
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Longest fixed-rate mortgage term accepted
pub const MAX_LOAN_TERM_YEARS: u32 = 100;

/// Property and financing parameters for one proforma
///
/// Currency amounts are per unit; `unit_count` scales them. Percentages are
/// whole numbers (7.0 means 7%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProformaInput {
    pub unit_type: UnitType,
    pub unit_count: u32,
    pub nominal_size_sqft: f64,
    pub cost_per_sqft: f64,
    pub monthly_rent: f64,
    pub down_payment_pct: f64,
    pub interest_rate_pct: f64,
    pub loan_term_years: u32,
    pub property_tax_rate_pct: f64,
    pub insurance_annual: f64,
    pub maintenance_pct: f64,
    pub vacancy_pct: f64,
    pub annual_rent_increase_pct: f64,
}

impl Default for ProformaInput {
    /// A single 600 sq ft detached unit at San Diego market assumptions
    fn default() -> Self {
        Self {
            unit_type: UnitType::Detached,
            unit_count: 1,
            nominal_size_sqft: 600.0,
            cost_per_sqft: 350.0,
            monthly_rent: 2200.0,
            down_payment_pct: 20.0,
            interest_rate_pct: 7.0,
            loan_term_years: 30,
            property_tax_rate_pct: 1.1,
            insurance_annual: 1200.0,
            maintenance_pct: 5.0,
            vacancy_pct: 5.0,
            annual_rent_increase_pct: 3.0,
        }
    }
}

impl ProformaInput {
    /// Reject inputs that would produce a meaningless or non-finite proforma
    pub fn validate(&self) -> Result<()> {
        if !self.nominal_size_sqft.is_finite() || self.nominal_size_sqft <= 0.0 {
            return Err(ProformaError::validation(
                "nominal_size_sqft",
                format!("must be positive, got {}", self.nominal_size_sqft),
            ));
        }
        if self.unit_count < 1 {
            return Err(ProformaError::validation("unit_count", "must be at least 1"));
        }
        if !(1..=MAX_LOAN_TERM_YEARS).contains(&self.loan_term_years) {
            return Err(ProformaError::validation(
                "loan_term_years",
                format!("must be between 1 and {}, got {}", MAX_LOAN_TERM_YEARS, self.loan_term_years),
            ));
        }

        let amounts = [
            ("cost_per_sqft", self.cost_per_sqft),
            ("monthly_rent", self.monthly_rent),
            ("insurance_annual", self.insurance_annual),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ProformaError::validation(
                    field,
                    format!("must be a non-negative amount, got {}", value),
                ));
            }
        }

        let percentages = [
            ("down_payment_pct", self.down_payment_pct),
            ("interest_rate_pct", self.interest_rate_pct),
            ("property_tax_rate_pct", self.property_tax_rate_pct),
            ("maintenance_pct", self.maintenance_pct),
            ("vacancy_pct", self.vacancy_pct),
            ("annual_rent_increase_pct", self.annual_rent_increase_pct),
        ];
        for (field, value) in percentages {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ProformaError::validation(
                    field,
                    format!("must be a percentage between 0 and 100, got {}", value),
                ));
            }
        }

        Ok(())
    }

    /// Copy of this input with the size held inside the schedule's range for its unit type
    pub fn clamped_to(&self, schedule: &FeeSchedule) -> Self {
        let (min, max) = schedule.size_range(self.unit_type);
        Self {
            nominal_size_sqft: self.nominal_size_sqft.clamp(min, max.max(min)),
            unit_count: self.unit_count.max(1),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ProformaInput::default().validate().is_ok());
    }

    #[test]
    fn test_unit_type_parse_and_labels() {
        assert_eq!("jadu".parse::<UnitType>().unwrap(), UnitType::Jadu);
        assert_eq!("Detached".parse::<UnitType>().unwrap(), UnitType::Detached);
        assert!(matches!(
            "cottage".parse::<UnitType>(),
            Err(ProformaError::UnknownUnitType(_))
        ));
        assert_eq!(UnitType::Conversion.label(), "Garage Conversion");
        assert_eq!(UnitType::Jadu.to_string(), "jadu");
    }

    #[test]
    fn test_validation_failures() {
        let input = ProformaInput { nominal_size_sqft: 0.0, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(ProformaError::Validation { field: "nominal_size_sqft", .. })
        ));

        let input = ProformaInput { unit_count: 0, ..Default::default() };
        assert!(input.validate().is_err());

        let input = ProformaInput { loan_term_years: 0, ..Default::default() };
        assert!(input.validate().is_err());

        let input = ProformaInput { vacancy_pct: -1.0, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(ProformaError::Validation { field: "vacancy_pct", .. })
        ));

        let input = ProformaInput { monthly_rent: f64::NAN, ..Default::default() };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_percentages_above_hundred_rejected() {
        let input = ProformaInput { down_payment_pct: 100.5, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(ProformaError::Validation { field: "down_payment_pct", .. })
        ));

        let input = ProformaInput { vacancy_pct: 101.0, ..Default::default() };
        assert!(input.validate().is_err());

        let input = ProformaInput { down_payment_pct: 100.0, ..Default::default() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_non_finite_and_negative_amounts_rejected() {
        let input = ProformaInput { interest_rate_pct: f64::INFINITY, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(ProformaError::Validation { field: "interest_rate_pct", .. })
        ));

        let input = ProformaInput { insurance_annual: -1.0, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(ProformaError::Validation { field: "insurance_annual", .. })
        ));

        let input = ProformaInput { cost_per_sqft: f64::INFINITY, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(ProformaError::Validation { field: "cost_per_sqft", .. })
        ));

        let input = ProformaInput { nominal_size_sqft: f64::INFINITY, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(ProformaError::Validation { field: "nominal_size_sqft", .. })
        ));
    }

    #[test]
    fn test_loan_term_bounds() {
        let input = ProformaInput { loan_term_years: MAX_LOAN_TERM_YEARS, ..Default::default() };
        assert!(input.validate().is_ok());

        for loan_term_years in [MAX_LOAN_TERM_YEARS + 1, 400_000_000, u32::MAX] {
            let input = ProformaInput { loan_term_years, ..Default::default() };
            assert!(matches!(
                input.validate(),
                Err(ProformaError::Validation { field: "loan_term_years", .. })
            ));
        }
    }

    #[test]
    fn test_unit_type_catalog() {
        let schedule = FeeSchedule::san_diego_2025();
        assert_eq!(UnitType::Detached.description(), "Standalone unit in backyard");
        assert_eq!(UnitType::Jadu.description(), "Up to 500 sq ft, within home");
        assert_eq!(UnitType::Jadu.max_size_sqft(&schedule), 500.0);
        assert_eq!(UnitType::Conversion.max_size_sqft(&schedule), 1200.0);
        assert!(UnitType::ALL.iter().all(|t| !t.description().is_empty()));
    }

    #[test]
    fn test_zero_percentages_are_valid() {
        let input = ProformaInput {
            down_payment_pct: 0.0,
            interest_rate_pct: 0.0,
            vacancy_pct: 0.0,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_clamped_to_schedule() {
        let schedule = FeeSchedule::san_diego_2025();

        let jadu = ProformaInput {
            unit_type: UnitType::Jadu,
            nominal_size_sqft: 800.0,
            ..Default::default()
        };
        assert_eq!(jadu.clamped_to(&schedule).nominal_size_sqft, 500.0);

        let tiny = ProformaInput { nominal_size_sqft: 90.0, ..Default::default() };
        assert_eq!(tiny.clamped_to(&schedule).nominal_size_sqft, 150.0);

        let large = ProformaInput { nominal_size_sqft: 1500.0, ..Default::default() };
        assert_eq!(large.clamped_to(&schedule).nominal_size_sqft, 1200.0);
    }

    #[test]
    fn test_json_missing_fields_take_defaults() {
        let input: ProformaInput =
            serde_json::from_str(r#"{"unitType":"jadu","monthlyRent":1800}"#).unwrap();
        assert_eq!(input.unit_type, UnitType::Jadu);
        assert_eq!(input.monthly_rent, 1800.0);
        assert_eq!(input.loan_term_years, 30);
    }
}
