//! Proforma computation: fees, financing, operating cash flow and projection

mod size;
mod fees;
mod costs;
mod financing;
mod expenses;
mod projection;
mod metrics;
mod result;
mod engine;
mod cache;

pub use size::resolve_size;
pub use fees::{permit_fee, FeeBreakdown};
pub use costs::ProjectCosts;
pub use financing::{monthly_payment, Financing};
pub use expenses::{FixedMonthlyCosts, MonthlyExpenses, OperatingCashFlow};
pub use projection::{CashFlowProjector, ProjectionYear, ProjectorState, PROJECTION_YEARS};
pub use metrics::{
    cash_on_cash_return_pct, cost_breakdown, payback, CostBreakdownItem, CostCategory, Payback,
    PAYBACK_DISPLAY_LIMIT_YEARS,
};
pub use result::ProformaResult;
pub use engine::{compute_proforma, ProformaEngine};
pub use cache::{InputKey, ProformaCache, DEFAULT_MAX_ENTRIES};
