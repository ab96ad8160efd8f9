//! ADU Proforma - investment analysis for Accessory Dwelling Units
//!
//! This library provides:
//! - Jurisdiction fee schedules (size limits, school/water/sewer/permit fees)
//! - Construction cost and fixed-rate loan amortization
//! - Monthly operating expenses and cash flow
//! - 10-year cash flow projection with rent escalation
//! - Return metrics (cash-on-cash return, payback period)
//! - Memoized and parallel batch scenario runs

pub mod error;
pub mod schedule;
pub mod input;
pub mod proforma;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProformaError, Result};
pub use schedule::{FeeSchedule, PermitFeeMode};
pub use input::{ProformaInput, Scenario, UnitType};
pub use proforma::{compute_proforma, Payback, ProformaEngine, ProformaResult, ProjectionYear};
pub use scenario::ScenarioRunner;
