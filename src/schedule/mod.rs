//! Jurisdiction fee schedules: size bounds, fee rates and thresholds

pub mod loader;

pub use loader::{load_schedule, load_schedule_from_reader, DEFAULT_SCHEDULE_PATH};

use crate::error::{ProformaError, Result};
use crate::input::UnitType;
use serde::{Deserialize, Serialize};

/// How the permit fee behaves for sizes above `permit_fee_size_cap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitFeeMode {
    /// Keep interpolating past the cap (fee may exceed `permit_fee_max`)
    #[default]
    Extrapolate,
    /// Hold the fee at `permit_fee_max` once the cap is reached
    Clamp,
}

impl PermitFeeMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extrapolate" => Some(PermitFeeMode::Extrapolate),
            "clamp" => Some(PermitFeeMode::Clamp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermitFeeMode::Extrapolate => "extrapolate",
            PermitFeeMode::Clamp => "clamp",
        }
    }
}

/// Regulatory constants for one jurisdiction
///
/// All sizes are square feet, all fees are dollars per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeSchedule {
    /// Jurisdiction label, for reports only
    pub name: String,

    /// Smallest ADU the jurisdiction permits
    pub min_size_sqft: f64,

    /// Largest ADU the jurisdiction permits
    pub max_size_sqft: f64,

    /// Largest Junior ADU; nominal JADU sizes are clamped to this
    pub jadu_max_size_sqft: f64,

    /// Side/rear setback (informational)
    pub setback_feet: f64,

    /// Height limit (informational)
    pub max_height_feet: f64,

    /// Units at or below this size have impact fees waived
    pub impact_fee_waiver_threshold_sqft: f64,

    /// School fees apply strictly above this size
    pub school_fee_threshold_sqft: f64,
    pub school_fee_per_sqft: f64,

    pub water_fee: f64,
    pub sewer_fee: f64,

    /// Permit fee at zero size
    pub permit_fee_base: f64,
    /// Permit fee at `permit_fee_size_cap`
    pub permit_fee_max: f64,
    pub permit_fee_size_cap: f64,
    pub permit_fee_mode: PermitFeeMode,
}

impl FeeSchedule {
    /// City of San Diego ADU rules, 2024/2025
    pub fn san_diego_2025() -> Self {
        Self {
            name: "San Diego 2024/2025".to_string(),
            min_size_sqft: 150.0,
            max_size_sqft: 1200.0,
            jadu_max_size_sqft: 500.0,
            setback_feet: 4.0,
            max_height_feet: 24.0,
            impact_fee_waiver_threshold_sqft: 750.0,
            school_fee_threshold_sqft: 500.0,
            school_fee_per_sqft: 5.17,
            water_fee: 1524.0,
            sewer_fee: 2577.0,
            permit_fee_base: 6500.0,
            permit_fee_max: 21000.0,
            // Permit cost scales up to the full ADU maximum
            permit_fee_size_cap: 1200.0,
            permit_fee_mode: PermitFeeMode::Extrapolate,
        }
    }

    /// Size range (min, max) allowed for a unit type
    pub fn size_range(&self, unit_type: UnitType) -> (f64, f64) {
        let max = match unit_type {
            UnitType::Jadu => self.jadu_max_size_sqft,
            _ => self.max_size_sqft,
        };
        (self.min_size_sqft, max)
    }

    /// Check internal consistency of the schedule
    pub fn validate(&self) -> Result<()> {
        let amounts = [
            ("min_size_sqft", self.min_size_sqft),
            ("max_size_sqft", self.max_size_sqft),
            ("jadu_max_size_sqft", self.jadu_max_size_sqft),
            ("setback_feet", self.setback_feet),
            ("max_height_feet", self.max_height_feet),
            ("impact_fee_waiver_threshold_sqft", self.impact_fee_waiver_threshold_sqft),
            ("school_fee_threshold_sqft", self.school_fee_threshold_sqft),
            ("school_fee_per_sqft", self.school_fee_per_sqft),
            ("water_fee", self.water_fee),
            ("sewer_fee", self.sewer_fee),
            ("permit_fee_base", self.permit_fee_base),
            ("permit_fee_max", self.permit_fee_max),
            ("permit_fee_size_cap", self.permit_fee_size_cap),
        ];
        for (key, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ProformaError::Schedule(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        if self.jadu_max_size_sqft <= 0.0 {
            return Err(ProformaError::Schedule("jadu_max_size_sqft must be positive".into()));
        }
        if self.permit_fee_size_cap <= 0.0 {
            return Err(ProformaError::Schedule("permit_fee_size_cap must be positive".into()));
        }
        if self.permit_fee_max < self.permit_fee_base {
            return Err(ProformaError::Schedule(format!(
                "permit_fee_max ({}) is below permit_fee_base ({})",
                self.permit_fee_max, self.permit_fee_base
            )));
        }
        if self.min_size_sqft > self.max_size_sqft {
            return Err(ProformaError::Schedule(format!(
                "min_size_sqft ({}) exceeds max_size_sqft ({})",
                self.min_size_sqft, self.max_size_sqft
            )));
        }

        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::san_diego_2025()
    }
}
