//! Proforma inputs and scenario loading

mod data;
pub mod loader;

pub use data::{ProformaInput, UnitType, MAX_LOAN_TERM_YEARS};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
