//! Scenario runner for repeated and batch proformas
//!
//! Holds one fee schedule, memoizes single runs, and evaluates batches in
//! parallel.

use crate::error::Result;
use crate::input::{ProformaInput, Scenario};
use crate::proforma::{ProformaCache, ProformaEngine, ProformaResult};
use crate::schedule::FeeSchedule;
use rayon::prelude::*;

/// Runner bound to one jurisdiction
///
/// # Example
/// ```ignore
/// let mut runner = ScenarioRunner::new();
///
/// for rent in [1800.0, 2200.0, 2600.0] {
///     let input = ProformaInput { monthly_rent: rent, ..Default::default() };
///     let result = runner.run(&input)?;
/// }
/// ```
#[derive(Debug, Default)]
pub struct ScenarioRunner {
    engine: ProformaEngine,
    cache: ProformaCache,
}

impl ScenarioRunner {
    /// Create runner with the built-in San Diego schedule
    pub fn new() -> Self {
        Self::with_schedule(FeeSchedule::san_diego_2025())
    }

    /// Create runner with a pre-built schedule
    pub fn with_schedule(schedule: FeeSchedule) -> Self {
        Self {
            engine: ProformaEngine::new(schedule),
            cache: ProformaCache::new(),
        }
    }

    /// Run a single proforma, reusing the cached result for a repeated input
    pub fn run(&mut self, input: &ProformaInput) -> Result<ProformaResult> {
        if let Some(result) = self.cache.get(input) {
            let result = result.clone();
            self.cache.record_hit();
            return Ok(result);
        }

        self.cache.record_miss();
        let result = self.engine.compute(input)?;
        self.cache.insert(input, result.clone());
        Ok(result)
    }

    /// Run without touching the cache
    pub fn run_uncached(&self, input: &ProformaInput) -> Result<ProformaResult> {
        self.engine.compute(input)
    }

    /// Run many inputs in parallel; output order matches input order
    pub fn run_batch(&self, inputs: &[ProformaInput]) -> Vec<Result<ProformaResult>> {
        inputs
            .par_iter()
            .map(|input| self.engine.compute(input))
            .collect()
    }

    /// Run loaded scenarios in parallel, pairing each result with its scenario id
    pub fn run_scenarios<'a>(
        &self,
        scenarios: &'a [Scenario],
    ) -> Vec<(&'a str, Result<ProformaResult>)> {
        scenarios
            .par_iter()
            .map(|scenario| (scenario.id.as_str(), self.engine.compute(&scenario.input)))
            .collect()
    }

    pub fn schedule(&self) -> &FeeSchedule {
        self.engine.schedule()
    }

    /// Replace the schedule; cached results belong to the old one and are dropped
    pub fn set_schedule(&mut self, schedule: FeeSchedule) {
        self.engine = ProformaEngine::new(schedule);
        self.cache.clear();
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &ProformaCache {
        &self.cache
    }

    pub fn hit_rate(&self) -> f64 {
        self.cache.hit_rate()
    }
}
