//! Memoization of proforma results keyed by the full input tuple
//!
//! A dashboard recomputes on every re-render even when no input moved; the
//! cache turns those into lookups. Results are deterministic, so an entry
//! never goes stale for a fixed schedule. The map is bounded; once full it is
//! emptied before the next new entry.

use super::result::ProformaResult;
use crate::input::{ProformaInput, UnitType};
use std::collections::HashMap;

/// Hashable identity of a `ProformaInput`
///
/// Float fields are keyed by bit pattern, so `0.0` and `-0.0` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputKey {
    unit_type: UnitType,
    unit_count: u32,
    loan_term_years: u32,
    amounts: [u64; 10],
}

impl From<&ProformaInput> for InputKey {
    fn from(input: &ProformaInput) -> Self {
        Self {
            unit_type: input.unit_type,
            unit_count: input.unit_count,
            loan_term_years: input.loan_term_years,
            amounts: [
                input.nominal_size_sqft.to_bits(),
                input.cost_per_sqft.to_bits(),
                input.monthly_rent.to_bits(),
                input.down_payment_pct.to_bits(),
                input.interest_rate_pct.to_bits(),
                input.property_tax_rate_pct.to_bits(),
                input.insurance_annual.to_bits(),
                input.maintenance_pct.to_bits(),
                input.vacancy_pct.to_bits(),
                input.annual_rent_increase_pct.to_bits(),
            ],
        }
    }
}

/// Entries held before the cache starts over
pub const DEFAULT_MAX_ENTRIES: usize = 4096;

/// Cache of computed proformas for one fee schedule
#[derive(Debug)]
pub struct ProformaCache {
    entries: HashMap<InputKey, ProformaResult>,
    max_entries: usize,

    /// Statistics
    pub cache_hits: u64,
    pub cache_misses: u64,
}

impl Default for ProformaCache {
    fn default() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }
}

impl ProformaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            cache_hits: 0,
            cache_misses: 0,
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn get(&self, input: &ProformaInput) -> Option<&ProformaResult> {
        self.entries.get(&InputKey::from(input))
    }

    pub fn insert(&mut self, input: &ProformaInput, result: ProformaResult) {
        let key = InputKey::from(input);
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            log::debug!("Proforma cache full at {} entries, clearing", self.entries.len());
            self.entries.clear();
        }
        self.entries.insert(key, result);
    }

    /// Clear all cached results and statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cache_hits = 0;
        self.cache_misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record_hit(&mut self) {
        self.cache_hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.cache_misses += 1;
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}
